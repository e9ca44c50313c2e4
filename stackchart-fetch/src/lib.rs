pub mod config;
pub mod error;
pub mod fetcher;
pub mod local;

#[cfg(feature = "reqwest")]
pub mod reqwest_fetcher;

pub use config::FetchConfig;
pub use error::StackchartFetchError;
pub use fetcher::{extract_records, make_data_fetcher, DataFetcher};
pub use local::{FileDataFetcher, MemoryDataFetcher};

#[cfg(feature = "reqwest")]
pub use reqwest_fetcher::ReqwestDataFetcher;
