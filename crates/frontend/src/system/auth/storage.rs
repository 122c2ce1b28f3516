use contracts::domain::a001_log_event::KeyValueStorage;
use contracts::system::auth::SESSION_TOKEN_KEY;

use crate::shared::session_storage::SessionStorage;

/// Save session token to sessionStorage
pub fn save_token(token: &str) {
    if let Err(e) = SessionStorage.set_item(SESSION_TOKEN_KEY, token) {
        log::warn!("Failed to store session token: {}", e);
    }
}

/// Get session token from sessionStorage
pub fn get_token() -> Option<String> {
    SessionStorage
        .get_item(SESSION_TOKEN_KEY)
        .filter(|t| !t.is_empty())
}

/// Forget the session token; cached filters stay
pub fn clear_token() {
    SessionStorage.remove_item(SESSION_TOKEN_KEY);
}
