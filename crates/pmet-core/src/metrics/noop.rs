use async_trait::async_trait;

use pmet_model::{Counters, RunnerKind};

use crate::error::MetricsResult;
use crate::metrics::capability::PipelineMetrics;

/// No-op metrics capability that always reports an empty counter set.
///
/// Reports itself as the direct runner, which has no queryable execution
/// statistics. Useful as a placeholder in wiring that requires a handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

#[async_trait]
impl PipelineMetrics for NoOpMetrics {
    fn runner(&self) -> RunnerKind {
        RunnerKind::Direct
    }

    async fn counters(&self) -> MetricsResult<Counters> {
        Ok(Counters::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[tokio::test]
    async fn counters_are_always_empty() {
        let metrics = NoOpMetrics;
        for _ in 0..10 {
            let counters = metrics.counters().await.unwrap();
            assert!(counters.is_empty());
        }
    }

    #[tokio::test]
    async fn progress_of_empty_counters_is_zero() {
        let metrics = NoOpMetrics;
        let progress = metrics.progress().await.unwrap();
        assert_eq!(progress.processed, 0);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent(), 0.0);
    }
}
