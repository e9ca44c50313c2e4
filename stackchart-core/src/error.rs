use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackchartCoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: `{0}`")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StackchartCoreError>;
