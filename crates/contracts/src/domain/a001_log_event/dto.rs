use serde::{Deserialize, Serialize};

/// One row of the log events table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEventDto {
    pub global_instance_id: String,
    /// UTC, "YYYY-MM-DD HH:MM:SS"
    pub creation_time: String,
    pub severity: String,
    pub priority: String,
    pub category_name: String,
    #[serde(default)]
    pub eai_domain: Option<String>,
    #[serde(default)]
    pub business_domain: Option<String>,
    #[serde(default)]
    pub business_subdomain: Option<String>,
    #[serde(default)]
    pub application: Option<String>,
    #[serde(default)]
    pub event_context: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}
