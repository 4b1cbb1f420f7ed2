use thiserror::Error;

pub type AdsResult<T> = Result<T, AdsError>;

#[derive(Error, Debug)]
pub enum AdsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Persistence slot error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
