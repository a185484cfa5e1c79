use async_trait::async_trait;
use tracing::{debug, instrument};

use pmet_core::{MetricsError, PipelineMetrics};
use pmet_model::{Counters, MetricCounter, RunnerKind};

use crate::client::{FlinkRestClient, JobOverview, UserAccumulator};
use crate::{FlinkConfig, FlinkError};

/// Metrics capability backed by the Flink JobManager REST API.
///
/// Reads the user accumulators of the selected job and exposes them as
/// [`Counters`]. Running jobs are preferred; when none is running the most
/// recently finished matching job is used, so statistics of a completed
/// execution stay queryable.
pub struct FlinkMetrics {
    client: FlinkRestClient,
    job_name_filter: Option<String>,
}

impl FlinkMetrics {
    /// Build the capability from config.
    ///
    /// This only constructs the REST client; no request is made until the
    /// capability is queried.
    pub fn new(cfg: &FlinkConfig) -> Result<Self, FlinkError> {
        Ok(Self {
            client: FlinkRestClient::new(cfg)?,
            job_name_filter: cfg.job_name_filter.clone(),
        })
    }

    fn matches_filter(&self, job: &JobOverview) -> bool {
        match &self.job_name_filter {
            Some(filter) => job.name.contains(filter.as_str()),
            None => true,
        }
    }

    /// Pick the job to read statistics from.
    ///
    /// The most recently started running job wins; otherwise the most
    /// recently finished matching job.
    fn select_job(&self, jobs: Vec<JobOverview>) -> Option<JobOverview> {
        let mut candidates: Vec<JobOverview> =
            jobs.into_iter().filter(|j| self.matches_filter(j)).collect();

        if let Some(running) = candidates
            .iter()
            .filter(|j| j.is_running())
            .max_by_key(|j| j.start_time)
        {
            return Some(running.clone());
        }

        candidates.retain(|j| j.is_finished());
        candidates.into_iter().max_by_key(|j| j.end_time)
    }

    /// Convert accumulators to counter readings.
    ///
    /// Accumulator values arrive as strings; non-numeric ones are skipped.
    fn to_counters(accumulators: Vec<UserAccumulator>) -> Counters {
        let mut counters = Counters::new();
        for acc in accumulators {
            match acc.value.parse::<u64>() {
                Ok(value) => counters.push(MetricCounter::new(acc.name, value)),
                Err(_) => {
                    debug!(name = %acc.name, value = %acc.value, "skipping non-numeric accumulator");
                }
            }
        }
        counters
    }
}

#[async_trait]
impl PipelineMetrics for FlinkMetrics {
    fn runner(&self) -> RunnerKind {
        RunnerKind::Flink
    }

    #[instrument(level = "debug", skip(self))]
    async fn counters(&self) -> Result<Counters, MetricsError> {
        let jobs = self
            .client
            .jobs_overview()
            .await
            .map_err(MetricsError::from)?;

        let job = self
            .select_job(jobs)
            .ok_or_else(|| MetricsError::from(FlinkError::NoMatchingJob))?;
        debug!(job = %job.id, state = %job.state, "reading accumulators");

        let accumulators = self
            .client
            .job_accumulators(&job.id)
            .await
            .map_err(MetricsError::from)?;

        Ok(Self::to_counters(accumulators))
    }
}
