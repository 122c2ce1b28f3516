//! Browser `sessionStorage` behind the filter core's storage trait.
//!
//! Values survive a reload of the tab but not a new tab or device.

use contracts::domain::a001_log_event::KeyValueStorage;
use web_sys::window;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStorage;

impl KeyValueStorage for SessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_session_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_session_storage().ok_or("sessionStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
