use crate::config::FetchConfig;
use crate::error::StackchartFetchError;
use crate::fetcher::{extract_records, DataFetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use stackchart_core::Record;

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestDataFetcher {
    client: Client,
    headers: HeaderMap,
    config: FetchConfig,
}

impl ReqwestDataFetcher {
    pub fn try_new(config: FetchConfig) -> Result<Self, StackchartFetchError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| StackchartFetchError::InvalidHeader(format!("{name}: {err}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| StackchartFetchError::InvalidHeader(format!("{name}: {err}")))?;
            headers.append(name, value);
        }

        Ok(Self {
            client: ClientBuilder::new().user_agent(USER_AGENT).build()?,
            headers,
            config,
        })
    }
}

#[async_trait]
impl DataFetcher for ReqwestDataFetcher {
    async fn fetch_records(&self, query_id: &str) -> Result<Vec<Record>, StackchartFetchError> {
        let url = self.config.url_for(query_id);
        tracing::info!(query_id, %url, "fetching query results");

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StackchartFetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let records = extract_records(body, self.config.records_pointer.as_deref())?;
        tracing::debug!(query_id, records = records.len(), "fetched query results");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_header() {
        let config = FetchConfig::new("http://localhost").with_header("bad header", "x");
        assert!(matches!(
            ReqwestDataFetcher::try_new(config),
            Err(StackchartFetchError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_builds_with_headers() {
        let config = FetchConfig::new("http://localhost/{query_id}")
            .with_header("Authorization", "Key abc")
            .with_header("X-Trace", "1");
        let fetcher = ReqwestDataFetcher::try_new(config).unwrap();
        assert_eq!(fetcher.headers.len(), 2);
    }
}
