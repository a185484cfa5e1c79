//! Resolver that maps a pipeline-runner kind to its metrics capability.
//!
//! Capabilities are injected by explicit registration at wiring time; lookup
//! is a direct scan of the registered entries. Runners without a registered
//! capability resolve to `None` with a logged warning, which is the
//! documented absent-result case and never an error.
use pmet_model::RunnerKind;
use tracing::{debug, instrument, trace, warn};

use crate::metrics::MetricsHandle;

/// Single registered capability entry.
struct ProviderEntry {
    kind: RunnerKind,
    metrics: MetricsHandle,
}

/// Maps a [`RunnerKind`] to the [`MetricsHandle`] registered for it.
///
/// The mapping is fixed once wiring is done: registration happens at
/// construction time, resolution is synchronous, stateless and idempotent.
#[derive(Default)]
pub struct MetricsResolver {
    providers: Vec<ProviderEntry>,
}

impl MetricsResolver {
    /// Create an empty resolver.
    #[inline]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Associate a metrics handle with a runner kind.
    ///
    /// The first registration for a kind wins; later duplicates are ignored.
    pub fn register(&mut self, kind: RunnerKind, metrics: MetricsHandle) {
        if self.supports(kind) {
            debug!(runner = %kind, "duplicate metrics registration ignored");
            return;
        }
        self.providers.push(ProviderEntry { kind, metrics });
    }

    /// Look up the metrics handle registered for the given runner kind.
    ///
    /// Returns `None` and emits a warning when the runner does not support
    /// metrics retrieval.
    #[instrument(level = "debug", skip(self, kind), fields(runner = %kind))]
    pub fn resolve(&self, kind: RunnerKind) -> Option<MetricsHandle> {
        trace!("resolving metrics capability");

        let found = self
            .providers
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.metrics.clone());

        if found.is_none() {
            warn!(runner = %kind, "metrics is not supported for pipeline runner");
        }
        found
    }

    /// Look up by raw runner identifier (`"flink"`, `"FlinkRunner"`, ...).
    ///
    /// Identifiers that do not name a known runner, including the empty
    /// string, warn and return `None`.
    pub fn resolve_name(&self, name: &str) -> Option<MetricsHandle> {
        match name.parse::<RunnerKind>() {
            Ok(kind) => self.resolve(kind),
            Err(_) => {
                warn!(runner = name, "metrics is not supported for pipeline runner");
                None
            }
        }
    }

    /// Returns `true` if a handle is registered for the given kind.
    pub fn supports(&self, kind: RunnerKind) -> bool {
        self.providers.iter().any(|entry| entry.kind == kind)
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if no capabilities are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
