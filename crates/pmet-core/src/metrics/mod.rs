//! Metrics-retrieval abstraction for pipeline runners.
//!
//! This module provides the capability interface for reading execution
//! statistics out of a running (or finished) pipeline. Backends implement
//! [`PipelineMetrics`] and are handed out by [`crate::MetricsResolver`].
mod capability;
pub use capability::{MetricsHandle, PipelineMetrics};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
