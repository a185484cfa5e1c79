use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// No queryable pipeline execution exists right now.
    #[error("metrics unavailable: {0}")]
    Unavailable(String),

    /// The backing system failed while serving the query.
    #[error("metrics backend error: {0}")]
    Backend(String),
}

pub type MetricsResult<T> = Result<T, MetricsError>;
