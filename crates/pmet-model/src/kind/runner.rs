use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Execution backend responsible for running a data-processing pipeline.
///
/// The set of runners is fixed at compile time. Which of them support
/// metrics retrieval is decided at wiring time, by what gets registered in
/// the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunnerKind {
    /// Apache Flink cluster.
    Flink,
    /// In-process direct runner.
    Direct,
    /// Apache Spark cluster.
    Spark,
    /// Google Cloud Dataflow.
    Dataflow,
}

impl RunnerKind {
    /// Returns the kind as a static lowercase string.
    ///
    /// This is the form used in logs, lookups and serialized payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            RunnerKind::Flink => "flink",
            RunnerKind::Direct => "direct",
            RunnerKind::Spark => "spark",
            RunnerKind::Dataflow => "dataflow",
        }
    }

    /// Upstream runner class name, as reported by pipeline submission tooling.
    pub fn runner_name(&self) -> &'static str {
        match self {
            RunnerKind::Flink => "FlinkRunner",
            RunnerKind::Direct => "DirectRunner",
            RunnerKind::Spark => "SparkRunner",
            RunnerKind::Dataflow => "DataflowRunner",
        }
    }
}

impl FromStr for RunnerKind {
    type Err = ModelError;

    /// Parses both the lowercase form (`"flink"`) and the upstream runner
    /// class name (`"FlinkRunner"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flink" | "FlinkRunner" => Ok(RunnerKind::Flink),
            "direct" | "DirectRunner" => Ok(RunnerKind::Direct),
            "spark" | "SparkRunner" => Ok(RunnerKind::Spark),
            "dataflow" | "DataflowRunner" => Ok(RunnerKind::Dataflow),
            other => Err(ModelError::UnknownRunner(other.to_string())),
        }
    }
}

impl fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
