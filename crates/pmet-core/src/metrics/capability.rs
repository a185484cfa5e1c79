use std::sync::Arc;

use async_trait::async_trait;

use pmet_model::{Counters, ProgressStats, RunnerKind};

use crate::error::MetricsResult;

/// Metrics-retrieval capability of a pipeline runner.
///
/// Implementations read statistics of an in-flight or completed pipeline
/// execution from their backing system. Retrieval is read-only: repeated
/// calls observe the execution, they never change it.
#[async_trait]
pub trait PipelineMetrics: Send + Sync + 'static {
    /// Runner this capability reads statistics from.
    fn runner(&self) -> RunnerKind;

    /// Fetch the current counter readings for the pipeline execution.
    async fn counters(&self) -> MetricsResult<Counters>;

    /// Progress derived from the well-known record counters.
    ///
    /// The default implementation queries [`PipelineMetrics::counters`] and
    /// treats missing counters as zero.
    async fn progress(&self) -> MetricsResult<ProgressStats> {
        Ok(ProgressStats::from_counters(&self.counters().await?))
    }
}

/// Shared handle to a metrics capability.
///
/// Handed out by [`crate::MetricsResolver::resolve`] and cloned freely by
/// callers.
pub type MetricsHandle = Arc<dyn PipelineMetrics>;
