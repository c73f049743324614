use thiserror::Error;

pub type ReactivationResult<T> = Result<T, ReactivationError>;

#[derive(Error, Debug)]
pub enum ReactivationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
