use serde::{Deserialize, Serialize};

/// Single named counter reading taken from a pipeline execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCounter {
    name: String,
    value: u64,
}

impl MetricCounter {
    /// Create a new counter reading.
    pub fn new<N>(name: N, value: u64) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Counter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Counter value at the time the reading was taken.
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Set of counter readings for one pipeline execution.
///
/// Internally stored as a list of readings and serialized as a transparent
/// array wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counters(pub Vec<MetricCounter>);

impl Counters {
    /// Create an empty counter set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of readings in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all readings.
    pub fn iter(&self) -> impl Iterator<Item = &MetricCounter> {
        self.0.iter()
    }

    /// Get the value for a counter name, returning the last matching entry.
    ///
    /// This allows simple override semantics when merging snapshots.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0
            .iter()
            .rev()
            .find(|c| c.name() == name)
            .map(|c| c.value())
    }

    /// Append a reading to the set.
    ///
    /// Later entries override earlier ones when queried via [`Counters::get`].
    pub fn push(&mut self, counter: MetricCounter) {
        self.0.push(counter);
    }

    /// Merge two sets, where entries from `other` override earlier ones.
    ///
    /// The sets are combined by simple concatenation, allowing
    /// [`Counters::get`] to resolve overrides naturally by scanning from the
    /// end.
    pub fn merged(&self, other: &Counters) -> Counters {
        let mut out = self.0.clone();
        out.extend(other.0.clone());
        Counters(out)
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Counters, MetricCounter};

    #[test]
    fn counters_new_is_empty() {
        let counters = Counters::new();
        assert_eq!(counters.len(), 0);
        assert!(counters.is_empty());
        assert!(counters.get("processed_records").is_none());
    }

    #[test]
    fn push_and_override_last_wins() {
        let mut counters = Counters::new();
        counters.push(MetricCounter::new("processed_records", 10));
        counters.push(MetricCounter::new("total_records", 100));
        counters.push(MetricCounter::new("processed_records", 25));

        assert_eq!(counters.get("processed_records"), Some(25));
        assert_eq!(counters.get("total_records"), Some(100));
        assert!(counters.get("failed_records").is_none());
    }

    #[test]
    fn merged_other_overrides_base() {
        let base = {
            let mut c = Counters::new();
            c.push(MetricCounter::new("processed_records", 10));
            c.push(MetricCounter::new("total_records", 100));
            c
        };

        let other = {
            let mut c = Counters::new();
            c.push(MetricCounter::new("processed_records", 50));
            c
        };

        let merged = base.merged(&other);

        assert_eq!(merged.get("processed_records"), Some(50));
        assert_eq!(merged.get("total_records"), Some(100));
    }

    #[test]
    fn serde_transparent_roundtrip_json() {
        let mut counters = Counters::new();
        counters.push(MetricCounter::new("processed_records", 42));

        let json = serde_json::to_string(&counters).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"name\":\"processed_records\""));
        assert!(json.contains("\"value\":42"));

        let back: Counters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("processed_records"), Some(42));
    }
}
