use stackchart_core::StackchartCoreError;
use stackchart_fetch::StackchartFetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackchartAppError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("json error: `{0}`")]
    Json(#[from] serde_json::Error),

    #[error("Cannot move chart from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Fetch error: {0}")]
    FetchError(#[from] StackchartFetchError),

    #[error("Chart error: {0}")]
    CoreError(#[from] StackchartCoreError),

    #[error("io error: `{0}`")]
    Io(#[from] std::io::Error),
}
