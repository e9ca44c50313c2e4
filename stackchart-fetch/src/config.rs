use serde::{Deserialize, Serialize};

pub const QUERY_ID_PLACEHOLDER: &str = "{query_id}";

/// Where and how to request query results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL template, `{query_id}` is replaced by the url-encoded query id.
    /// Without a placeholder the query id is appended as a path segment.
    pub endpoint: String,

    /// JSON pointer to the records array in the response body.
    /// The whole body is used when absent or empty.
    #[serde(default)]
    pub records_pointer: Option<String>,

    /// Extra request headers, e.g. authorization
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl FetchConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_records_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.records_pointer = Some(pointer.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn url_for(&self, query_id: &str) -> String {
        let encoded = urlencoding::encode(query_id);
        if self.endpoint.contains(QUERY_ID_PLACEHOLDER) {
            self.endpoint.replace(QUERY_ID_PLACEHOLDER, &encoded)
        } else {
            format!("{}/{}", self.endpoint.trim_end_matches('/'), encoded)
        }
    }
}
