use gloo_net::http::Request;
use web_sys::FormData;

use crate::behaviors::contact::{FormTransport, Reply, SubmitError};

/// Posts forms with the Fetch API as multipart form data.
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<Reply, SubmitError> {
        let form_data = FormData::new().map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
        for (name, value) in fields {
            form_data
                .append_with_str(name, value)
                .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(form_data)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(Reply { status, body })
    }
}
