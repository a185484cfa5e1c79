mod constants;
pub use constants::{COUNTER_PROCESSED_RECORDS, COUNTER_TOTAL_RECORDS};

mod counter;
pub use counter::{Counters, MetricCounter};

mod progress;
pub use progress::ProgressStats;
