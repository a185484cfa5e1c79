use thiserror::Error;

use pmet_core::MetricsError;

#[derive(Debug, Error)]
pub enum FlinkError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("no matching flink job")]
    NoMatchingJob,
}

impl From<FlinkError> for MetricsError {
    fn from(e: FlinkError) -> Self {
        match e {
            FlinkError::NoMatchingJob => MetricsError::Unavailable(e.to_string()),
            other => MetricsError::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matching_job_maps_to_unavailable() {
        let err: MetricsError = FlinkError::NoMatchingJob.into();
        assert!(matches!(err, MetricsError::Unavailable(_)));
    }

    #[test]
    fn status_errors_map_to_backend() {
        let err: MetricsError = FlinkError::UnexpectedStatus {
            endpoint: "http://jm:8081/jobs/overview".to_string(),
            status: 503,
        }
        .into();

        match err {
            MetricsError::Backend(msg) => assert!(msg.contains("503"), "message: {msg}"),
            other => panic!("expected Backend, got {other:?}"),
        }
    }
}
