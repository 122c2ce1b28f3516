use serde::{Deserialize, Serialize};

/// Session storage key of the opaque session token
pub const SESSION_TOKEN_KEY: &str = "token";

/// Credential payload for the validation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRequest {
    pub user: String,
    pub password: String,
}
