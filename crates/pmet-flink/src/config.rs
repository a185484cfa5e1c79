use serde::{Deserialize, Serialize};

/// Flink JobManager connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlinkConfig {
    /// Base URL of the JobManager REST endpoint.
    pub base_url: String,
    /// Only consider jobs whose name contains this substring.
    ///
    /// Useful when the cluster hosts jobs from several controllers.
    pub job_name_filter: Option<String>,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for FlinkConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            job_name_filter: None,
            request_timeout_ms: 5_000,
        }
    }
}
