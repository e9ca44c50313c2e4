use std::sync::Arc;

use serde_json::Value;
use stackchart_core::build_chart_options;
use stackchart_fetch::DataFetcher;

use crate::config::ChartConfig;
use crate::error::StackchartAppError;
use crate::lifecycle::ChartLifecycle;

/// Notice shown for every failure, whatever its cause
pub const FAILURE_NOTICE: &str = "Unable to load chart";

/// Fetches a chart's dataset and turns it into rendering options
#[derive(Clone)]
pub struct ChartPipeline {
    fetcher: Arc<dyn DataFetcher>,
}

impl ChartPipeline {
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch, then pivot if needed, then assemble the options
    ///
    /// Errors from any step are returned unchanged.
    #[tracing::instrument(
        skip_all,
        fields(query_id = %config.query_id, graph_type = %config.graph_type)
    )]
    pub async fn build_options(&self, config: &ChartConfig) -> Result<Value, StackchartAppError> {
        let dataset = self.fetcher.fetch_records(&config.query_id).await?;
        let options = build_chart_options(&config.echart_config, dataset, &config.graph_type)?;
        Ok(options)
    }

    /// Run the pipeline once and report the outcome as a lifecycle
    ///
    /// Every error ends in the same failed state carrying [`FAILURE_NOTICE`];
    /// the underlying error is only logged.
    pub async fn run(&self, config: &ChartConfig) -> ChartLifecycle {
        let mut lifecycle = ChartLifecycle::start();
        let transition = match self.build_options(config).await {
            Ok(options) => lifecycle.succeed(options),
            Err(err) => {
                tracing::error!(query_id = %config.query_id, error = %err, "failed to build chart");
                lifecycle.fail(FAILURE_NOTICE)
            }
        };
        if let Err(err) = transition {
            tracing::error!(error = %err, "unexpected chart state change");
        }
        lifecycle
    }
}
