use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{json, Value};
use stackchart_app::{
    ChartConfig, ChartPipeline, ChartState, ChartView, StackchartAppError, FAILURE_NOTICE,
};
use stackchart_core::{Record, StackchartCoreError};
use stackchart_fetch::{DataFetcher, MemoryDataFetcher, StackchartFetchError};

fn sales() -> Vec<Record> {
    serde_json::from_value(json!([
        {"month": "Jan", "region": "East", "sales": 10},
        {"month": "Jan", "region": "West", "sales": 5},
        {"month": "Feb", "region": "East", "sales": 7},
    ]))
    .unwrap()
}

fn config(graph_type: &str, echart_config: Value) -> ChartConfig {
    ChartConfig {
        echart_config: echart_config.as_object().cloned().unwrap_or_default(),
        query_id: "sales".to_string(),
        graph_type: graph_type.to_string(),
    }
}

fn pipeline() -> ChartPipeline {
    ChartPipeline::new(Arc::new(MemoryDataFetcher::new().with_query("sales", sales())))
}

struct ServerError;

#[async_trait]
impl DataFetcher for ServerError {
    async fn fetch_records(&self, _query_id: &str) -> Result<Vec<Record>, StackchartFetchError> {
        Err(StackchartFetchError::Status {
            url: "http://localhost/sales".to_string(),
            status: 500,
        })
    }
}

#[tokio::test]
async fn test_stacked_column_chart() -> Result<()> {
    let config = config(
        "stacked_column_chart",
        json!({
            "legend": {},
            "series": [{"x": "month", "y": "sales", "category": "region"}],
        }),
    );

    let options = pipeline().build_options(&config).await?;
    assert_eq!(
        options,
        json!({
            "legend": {},
            "series": [
                {"type": "bar", "stack": "all",
                 "encode": {"x": "month", "y": "East"}, "name": "East"},
                {"type": "bar", "stack": "all",
                 "encode": {"x": "month", "y": "West"}, "name": "West"},
            ],
            "dataset": {"source": [
                {"month": "Jan", "East": 10, "West": 5},
                {"month": "Feb", "East": 7, "West": 0},
            ]},
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_pass_through_chart() -> Result<()> {
    let series = json!([{"type": "bar", "encode": {"x": "month", "y": "sales"}}]);
    let config = config("bar_chart", json!({"series": series.clone()}));

    let lifecycle = pipeline().run(&config).await;
    let ChartView::Chart { options } = lifecycle.render() else {
        panic!("expected a chart, got {:?}", lifecycle.state());
    };
    assert_eq!(options["series"], series);
    assert_eq!(options["dataset"]["source"], serde_json::to_value(sales())?);
    Ok(())
}

#[tokio::test]
async fn test_build_options_propagates_errors() {
    let config = config("stacked_area_chart", json!({}));
    let err = pipeline().build_options(&config).await.unwrap_err();
    assert!(matches!(
        err,
        StackchartAppError::CoreError(StackchartCoreError::Configuration(_))
    ));

    let err = ChartPipeline::new(Arc::new(ServerError))
        .build_options(&config)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StackchartAppError::FetchError(StackchartFetchError::Status { status: 500, .. })
    ));
}

#[rstest]
#[case::missing_series("stacked_area_chart", "sales", false)]
#[case::unknown_query("bar_chart", "nope", false)]
#[case::server_error("bar_chart", "sales", true)]
#[tokio::test]
async fn test_every_failure_looks_the_same(
    #[case] graph_type: &str,
    #[case] query_id: &str,
    #[case] server_error: bool,
) {
    let mut config = config(graph_type, json!({}));
    config.query_id = query_id.to_string();
    let pipeline = if server_error {
        ChartPipeline::new(Arc::new(ServerError))
    } else {
        pipeline()
    };

    let lifecycle = pipeline.run(&config).await;
    assert_eq!(
        lifecycle.state(),
        &ChartState::Failed {
            message: FAILURE_NOTICE.to_string()
        }
    );
    assert_eq!(lifecycle.render(), ChartView::Error { message: FAILURE_NOTICE });
}
