//! Fetchers that never touch the network

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use stackchart_core::Record;

use crate::error::StackchartFetchError;
use crate::fetcher::{extract_records, DataFetcher};

/// Reads `<dir>/<query_id>.json`
#[derive(Debug, Clone)]
pub struct FileDataFetcher {
    dir: PathBuf,
    records_pointer: Option<String>,
}

impl FileDataFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            records_pointer: None,
        }
    }

    pub fn with_records_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.records_pointer = Some(pointer.into());
        self
    }

    fn path_for(&self, query_id: &str) -> Result<PathBuf, StackchartFetchError> {
        let is_plain_name = !query_id.is_empty()
            && query_id != "."
            && query_id != ".."
            && !query_id.contains(['/', '\\']);
        if !is_plain_name {
            return Err(StackchartFetchError::InvalidQueryId(query_id.to_string()));
        }
        Ok(self.dir.join(format!("{query_id}.json")))
    }
}

#[async_trait]
impl DataFetcher for FileDataFetcher {
    async fn fetch_records(&self, query_id: &str) -> Result<Vec<Record>, StackchartFetchError> {
        let path = self.path_for(query_id)?;
        tracing::info!(query_id, path = %path.display(), "reading query results");

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StackchartFetchError::QueryNotFound(query_id.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        let body: Value = serde_json::from_str(&contents)?;
        extract_records(body, self.records_pointer.as_deref())
    }
}

/// Serves records registered up front, keyed by query id
#[derive(Debug, Clone, Default)]
pub struct MemoryDataFetcher {
    queries: HashMap<String, Vec<Record>>,
}

impl MemoryDataFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query_id: impl Into<String>, records: Vec<Record>) -> Self {
        self.queries.insert(query_id.into(), records);
        self
    }
}

#[async_trait]
impl DataFetcher for MemoryDataFetcher {
    async fn fetch_records(&self, query_id: &str) -> Result<Vec<Record>, StackchartFetchError> {
        self.queries
            .get(query_id)
            .cloned()
            .ok_or_else(|| StackchartFetchError::QueryNotFound(query_id.to_string()))
    }
}
