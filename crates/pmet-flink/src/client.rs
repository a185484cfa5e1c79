//! Thin async client for the Flink JobManager REST API.
//!
//! Only the two endpoints the metrics capability needs are covered:
//! `GET /jobs/overview` and `GET /jobs/<jid>/accumulators`.
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::{FlinkConfig, FlinkError};

/// Job summary as returned by `GET /jobs/overview`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobOverview {
    /// Job id.
    #[serde(rename = "jid")]
    pub id: String,
    /// Human-readable job name.
    pub name: String,
    /// Lifecycle state (`RUNNING`, `FINISHED`, `FAILED`, ...).
    pub state: String,
    /// Start time, unix millis.
    #[serde(rename = "start-time")]
    pub start_time: i64,
    /// End time, unix millis; `-1` while the job is still running.
    #[serde(rename = "end-time")]
    pub end_time: i64,
}

impl JobOverview {
    /// Returns `true` for a job that is currently executing.
    pub fn is_running(&self) -> bool {
        self.state == "RUNNING"
    }

    /// Returns `true` for a job that ran to completion.
    pub fn is_finished(&self) -> bool {
        self.state == "FINISHED"
    }
}

#[derive(Debug, Deserialize)]
struct JobsOverviewResponse {
    jobs: Vec<JobOverview>,
}

/// One user accumulator as exposed by `GET /jobs/<jid>/accumulators`.
///
/// Flink serializes accumulator values as strings regardless of their type.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccumulator {
    /// Accumulator name.
    pub name: String,
    /// Accumulator type (`LongCounter`, `IntCounter`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Stringified accumulator value.
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct AccumulatorsResponse {
    #[serde(rename = "user-task-accumulators")]
    user_task_accumulators: Vec<UserAccumulator>,
}

/// Async client over the JobManager REST endpoint.
#[derive(Debug, Clone)]
pub struct FlinkRestClient {
    http: reqwest::Client,
    base_url: String,
}

impl FlinkRestClient {
    /// Build a client from config.
    pub fn new(cfg: &FlinkConfig) -> Result<Self, FlinkError> {
        let base_url = cfg.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FlinkError::InvalidBaseUrl(cfg.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch summaries of all jobs known to the JobManager.
    pub async fn jobs_overview(&self) -> Result<Vec<JobOverview>, FlinkError> {
        let url = format!("{}/jobs/overview", self.base_url);
        let body: JobsOverviewResponse = self.get_json(&url).await?;

        debug!(jobs = body.jobs.len(), "fetched flink jobs overview");
        Ok(body.jobs)
    }

    /// Fetch the user accumulators of a job.
    pub async fn job_accumulators(&self, job_id: &str) -> Result<Vec<UserAccumulator>, FlinkError> {
        let url = format!("{}/jobs/{}/accumulators", self.base_url, job_id);
        let body: AccumulatorsResponse = self.get_json(&url).await?;

        debug!(
            job = job_id,
            accumulators = body.user_task_accumulators.len(),
            "fetched flink job accumulators",
        );
        Ok(body.user_task_accumulators)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, FlinkError>
    where
        T: serde::de::DeserializeOwned,
    {
        trace!(%url, "flink rest request");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FlinkError::UnexpectedStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
