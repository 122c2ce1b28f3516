use thiserror::Error;

use super::validation::ValidationIssue;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filters are invalid: {0}")]
    Invalid(#[from] ValidationIssue),

    #[error("invalid local time '{value}'")]
    InvalidTime { value: String },

    #[error("failed to serialize filters: {0}")]
    Serialize(#[from] serde_json::Error),
}
