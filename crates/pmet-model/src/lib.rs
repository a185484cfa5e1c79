mod domain;
pub use domain::{COUNTER_PROCESSED_RECORDS, COUNTER_TOTAL_RECORDS};
pub use domain::{Counters, MetricCounter, ProgressStats};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::RunnerKind;
