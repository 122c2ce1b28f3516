use contracts::system::auth::CredentialRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Validate credentials, returning the opaque session token
pub async fn validate_credential(user: String, password: String) -> Result<String, String> {
    let request = CredentialRequest { user, password };

    let response = Request::post(&api_url("/api/auth/validate"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Credential validation failed: {}", response.status()));
    }

    let token = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let token = token.trim().trim_matches('"').to_string();

    if token.is_empty() {
        return Err("Credential validation returned an empty token".to_string());
    }
    Ok(token)
}
