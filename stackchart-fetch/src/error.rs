#[derive(Debug, thiserror::Error)]
pub enum StackchartFetchError {
    #[error("Request for `{url}` failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Query not found: `{0}`")]
    QueryNotFound(String),

    #[error("Invalid query id: `{0}`")]
    InvalidQueryId(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Data fetching is not enabled: {0}")]
    NoDataFetcherConfigured(String),

    #[error("io error: `{0}`")]
    Io(#[from] std::io::Error),

    #[error("json error: `{0}`")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "reqwest")]
    #[error("request error: `{0}`")]
    ReqwestError(#[from] reqwest::Error),
}
