use serde::Deserialize;
use thiserror::Error;

use crate::config::PageConfig;

pub const SUBMIT_LABEL: &str = "Enviar mensaje";
pub const SENDING_LABEL: &str = "Enviando...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Form field name as the endpoint receives it.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Phone => "telefono",
            Field::Message => "mensaje",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        [Field::Name, Field::Email, Field::Phone, Field::Message]
            .into_iter()
            .map(|field| (field.name(), self.get(field).to_string()))
            .collect()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self == &ContactFields::default()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint answered {status}{}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Sends the serialized form to its endpoint as a POST.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<Reply, SubmitError>;
}

#[derive(Deserialize)]
struct ErrorReply {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

fn rejection_detail(body: &str) -> Option<String> {
    let reply: ErrorReply = serde_json::from_str(body).ok()?;
    if reply.errors.is_empty() {
        return None;
    }
    Some(
        reply
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

pub async fn submit<T: FormTransport>(
    transport: &T,
    endpoint: &str,
    fields: &ContactFields,
) -> Result<(), SubmitError> {
    let reply = transport.post(endpoint, &fields.pairs()).await?;
    if (200..300).contains(&reply.status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: reply.status,
            detail: rejection_detail(&reply.body),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success,
    Failure,
}

impl FormMessage {
    pub fn text(self) -> &'static str {
        match self {
            FormMessage::Success => "¡Mensaje enviado con éxito! Nos pondremos en contacto pronto.",
            FormMessage::Failure => "Hubo un error al enviar el mensaje. Por favor, inténtalo de nuevo.",
        }
    }

    pub fn alert_class(self) -> &'static str {
        match self {
            FormMessage::Success => "alert alert-success",
            FormMessage::Failure => "alert alert-danger",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            FormMessage::Success => "fas fa-check-circle me-2",
            FormMessage::Failure => "fas fa-exclamation-circle me-2",
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    Begin,
    Finish(Result<(), SubmitError>),
    ClearMessage,
}

/// What happens after a submission settles, each at a delay in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    Confetti,
    ClearMessage,
}

pub fn follow_ups(sent: bool, config: &PageConfig) -> Vec<(u32, FollowUp)> {
    let mut steps = Vec::with_capacity(2);
    if sent {
        steps.push((0, FollowUp::Confetti));
    }
    steps.push((config.form_message_ttl_ms, FollowUp::ClearMessage));
    steps
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub busy: bool,
    pub message: Option<FormMessage>,
}

impl ContactFormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::Begin => self.busy = true,
            FormAction::Finish(Ok(())) => {
                self.busy = false;
                self.fields = ContactFields::default();
                self.message = Some(FormMessage::Success);
            }
            FormAction::Finish(Err(e)) => {
                log::warn!("Contact form submission failed: {}", e);
                self.busy = false;
                self.message = Some(FormMessage::Failure);
            }
            FormAction::ClearMessage => self.message = None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        reply: Result<Reply, SubmitError>,
        seen: RefCell<Vec<(String, Vec<(&'static str, String)>)>>,
    }

    impl FakeTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(Reply { status, body: body.into() }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                reply: Err(SubmitError::Network("Failed to fetch".into())),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for FakeTransport {
        async fn post(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<Reply, SubmitError> {
            self.seen.borrow_mut().push((endpoint.to_string(), fields.to_vec()));
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(SubmitError::Network(msg)) => Err(SubmitError::Network(msg.clone())),
                Err(SubmitError::Rejected { status, detail }) => Err(SubmitError::Rejected {
                    status: *status,
                    detail: detail.clone(),
                }),
            }
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.apply(FormAction::Edit(Field::Name, "Ana".into()));
        state.apply(FormAction::Edit(Field::Email, "ana@example.com".into()));
        state.apply(FormAction::Edit(Field::Message, "Hola".into()));
        state
    }

    fn run(state: &mut ContactFormState, transport: &FakeTransport) {
        state.apply(FormAction::Begin);
        assert!(state.busy);
        assert_eq!(state.submit_label(), SENDING_LABEL);
        let outcome = block_on(submit(transport, "https://forms.test/f/1", &state.fields));
        state.apply(FormAction::Finish(outcome));
    }

    #[test]
    fn success_clears_fields_and_reports() {
        let transport = FakeTransport::answering(200, r#"{"ok":true}"#);
        let mut state = filled();
        run(&mut state, &transport);
        assert!(!state.busy);
        assert!(state.fields.is_empty());
        assert_eq!(state.message, Some(FormMessage::Success));
        assert_eq!(state.submit_label(), SUBMIT_LABEL);

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "https://forms.test/f/1");
        assert!(seen[0].1.contains(&("nombre", "Ana".to_string())));
        assert!(seen[0].1.contains(&("mensaje", "Hola".to_string())));
    }

    #[test]
    fn rejection_keeps_fields() {
        let transport = FakeTransport::answering(422, r#"{"errors":[{"message":"email invalid"}]}"#);
        let mut state = filled();
        let before = state.fields.clone();
        run(&mut state, &transport);
        assert!(!state.busy);
        assert_eq!(state.fields, before);
        assert_eq!(state.message, Some(FormMessage::Failure));
    }

    #[test]
    fn network_error_is_a_failure() {
        let transport = FakeTransport::offline();
        let mut state = filled();
        run(&mut state, &transport);
        assert!(!state.busy);
        assert_eq!(state.fields.name, "Ana");
        assert_eq!(state.message, Some(FormMessage::Failure));
    }

    #[test]
    fn message_clears_after_timeout_action() {
        let transport = FakeTransport::answering(204, "");
        let mut state = filled();
        run(&mut state, &transport);
        state.apply(FormAction::ClearMessage);
        assert_eq!(state.message, None);
    }

    #[test]
    fn message_is_cleared_five_seconds_after_either_outcome() {
        let config = PageConfig::default();
        assert_eq!(
            follow_ups(true, &config),
            vec![(0, FollowUp::Confetti), (5000, FollowUp::ClearMessage)]
        );
        assert_eq!(follow_ups(false, &config), vec![(5000, FollowUp::ClearMessage)]);
    }

    #[test]
    fn any_ok_status_counts_as_success() {
        for status in [200, 201, 299] {
            let transport = FakeTransport::answering(status, "");
            assert_eq!(block_on(submit(&transport, "/f", &ContactFields::default())), Ok(()));
        }
        let transport = FakeTransport::answering(300, "");
        assert!(block_on(submit(&transport, "/f", &ContactFields::default())).is_err());
    }

    #[test]
    fn rejection_detail_comes_from_error_body() {
        let transport = FakeTransport::answering(400, r#"{"errors":[{"message":"a"},{"message":"b"}]}"#);
        let err = block_on(submit(&transport, "/f", &ContactFields::default())).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected { status: 400, detail: Some("a; b".into()) }
        );
        assert_eq!(err.to_string(), "endpoint answered 400: a; b");

        let transport = FakeTransport::answering(500, "<html>oops</html>");
        let err = block_on(submit(&transport, "/f", &ContactFields::default())).unwrap_err();
        assert_eq!(err.to_string(), "endpoint answered 500");
    }
}
