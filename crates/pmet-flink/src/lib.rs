//! Flink-backed metrics capability for pipeline executions.
//!
//! This crate provides [`FlinkMetrics`], an implementation of
//! [`pmet_core::PipelineMetrics`] that reads user accumulators of a job
//! through the Flink JobManager REST API.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use pmet_core::MetricsResolver;
//! use pmet_flink::{FlinkConfig, FlinkMetrics};
//! use pmet_model::RunnerKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FlinkConfig {
//!     base_url: "http://flink-jobmanager:8081".to_string(),
//!     ..Default::default()
//! };
//!
//! // Build the capability and register it for the flink runner
//! let metrics = FlinkMetrics::new(&cfg)?;
//! let mut resolver = MetricsResolver::new();
//! resolver.register(RunnerKind::Flink, Arc::new(metrics));
//!
//! // Supported runner resolves to a handle, everything else to None
//! assert!(resolver.resolve(RunnerKind::Flink).is_some());
//! assert!(resolver.resolve(RunnerKind::Spark).is_none());
//! # Ok(())
//! # }
//! ```
mod config;
pub use config::FlinkConfig;

mod error;
pub use error::FlinkError;

mod client;
pub use client::{FlinkRestClient, JobOverview, UserAccumulator};

mod backend;
pub use backend::FlinkMetrics;

use std::sync::Arc;

use pmet_core::MetricsResolver;
use pmet_model::RunnerKind;

/// Register a Flink-backed metrics capability in the given resolver.
///
/// After this call, [`MetricsResolver::resolve`] hands out a [`FlinkMetrics`]
/// handle for [`RunnerKind::Flink`].
pub fn register_flink_metrics(
    resolver: &mut MetricsResolver,
    cfg: &FlinkConfig,
) -> Result<(), FlinkError> {
    let metrics = FlinkMetrics::new(cfg)?;
    resolver.register(RunnerKind::Flink, Arc::new(metrics));
    Ok(())
}
