use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown pipeline runner: {0}")]
    UnknownRunner(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
