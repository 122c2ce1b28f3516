use async_trait::async_trait;
use contracts::domain::a001_log_event::dto::LogEventDto;
use contracts::domain::a001_log_event::{ColumnSource, QueryParams};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer};

/// Column enumeration over HTTP
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpColumnSource;

#[async_trait(?Send)]
impl ColumnSource for HttpColumnSource {
    async fn get_column(&self, token: Option<&str>, column: &str) -> Result<Vec<String>, String> {
        let url = api_url(&format!(
            "/api/log-events/columns/{}",
            urlencoding::encode(column)
        ));

        let mut request = Request::get(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Fetch log events matching the applied filters
pub async fn fetch_log_events(
    token: Option<&str>,
    params: &QueryParams,
) -> Result<Vec<LogEventDto>, String> {
    let query = serde_qs::to_string(params)
        .map_err(|e| format!("Failed to encode filters: {}", e))?;
    let url = api_url(&format!("/api/log-events?{}", query));

    let mut request = Request::get(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &bearer(token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<LogEventDto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
