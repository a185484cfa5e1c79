use serde::{Deserialize, Serialize};

use crate::{COUNTER_PROCESSED_RECORDS, COUNTER_TOTAL_RECORDS, Counters};

/// Progress of a pipeline execution derived from the well-known record
/// counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Records processed so far.
    pub processed: u64,
    /// Total records expected, `0` when the total is not known yet.
    pub total: u64,
}

impl ProgressStats {
    /// Create progress stats from raw numbers.
    pub fn new(processed: u64, total: u64) -> Self {
        Self { processed, total }
    }

    /// Derive progress from a counter set.
    ///
    /// Missing counters count as zero.
    pub fn from_counters(counters: &Counters) -> Self {
        Self {
            processed: counters.get(COUNTER_PROCESSED_RECORDS).unwrap_or(0),
            total: counters.get(COUNTER_TOTAL_RECORDS).unwrap_or(0),
        }
    }

    /// Completion percentage in `[0.0, 100.0]`.
    ///
    /// An unknown total yields `0.0`; a processed count running ahead of the
    /// advertised total is clamped to `100.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        ((self.processed as f64 / self.total as f64) * 100.0).min(100.0)
    }
}
