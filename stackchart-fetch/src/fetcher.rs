use std::sync::Arc;

#[cfg(all(feature = "reqwest", not(target_arch = "wasm32")))]
use crate::reqwest_fetcher::ReqwestDataFetcher;

use crate::config::FetchConfig;
use crate::error::StackchartFetchError;
use async_trait::async_trait;
use serde_json::Value;
use stackchart_core::Record;

/// Source of query results
///
/// Implementations perform a single request per call. Failures are returned
/// as is, callers are not expected to retry.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch_records(&self, query_id: &str) -> Result<Vec<Record>, StackchartFetchError>;
}

pub fn make_data_fetcher(
    config: &FetchConfig,
) -> Result<Arc<dyn DataFetcher>, StackchartFetchError> {
    cfg_if::cfg_if! {
        if #[cfg(all(feature = "reqwest", not(target_arch = "wasm32")))] {
            Ok(Arc::new(ReqwestDataFetcher::try_new(config.clone())?))
        } else {
            let _ = config;
            Err(StackchartFetchError::NoDataFetcherConfigured(
                "HTTP fetching requires the http feature flag".to_string()
            ))
        }
    }
}

/// Pull the records array out of a parsed response body
pub fn extract_records(
    mut body: Value,
    pointer: Option<&str>,
) -> Result<Vec<Record>, StackchartFetchError> {
    let records = match pointer {
        None | Some("") => body,
        Some(pointer) => body.pointer_mut(pointer).map(Value::take).ok_or_else(|| {
            StackchartFetchError::InvalidResponse(format!("no value at `{pointer}`"))
        })?,
    };

    if !records.is_array() {
        return Err(StackchartFetchError::InvalidResponse(
            "expected an array of records".to_string(),
        ));
    }
    Ok(serde_json::from_value(records)?)
}
