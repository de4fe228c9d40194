use web_sys::{window, Storage};

use crate::behaviors::consent::FlagStore;

/// `window.localStorage`, if the browser grants it.
pub struct LocalStorage;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

impl FlagStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }
}
