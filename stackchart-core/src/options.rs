use serde_json::{Map, Value};

use crate::chart_type::StackedChart;
use crate::data::Record;
use crate::error::Result;
use crate::pivot::{pivot, SeriesConfig};
use crate::series::{synthesize_series, SeriesDefinition};

pub const DATASET_KEY: &str = "dataset";
pub const SOURCE_KEY: &str = "source";
pub const SERIES_KEY: &str = "series";

/// Series list handed to the rendering engine
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesList {
    /// The chart configuration's own series list, untouched
    Original(Option<Value>),
    /// One series per category of a pivoted dataset
    Synthesized(Vec<SeriesDefinition>),
}

impl SeriesList {
    fn into_value(self) -> Result<Option<Value>> {
        match self {
            SeriesList::Original(series) => Ok(series),
            SeriesList::Synthesized(series) => Ok(Some(serde_json::to_value(series)?)),
        }
    }
}

/// Dataset and series list after the pivot step
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub source: Vec<Record>,
    pub series: SeriesList,
}

/// Pivot the dataset and synthesize series when the chart type requires it
///
/// Chart types that need no pivot get `dataset` and `series` back unchanged.
pub fn transform(
    dataset: Vec<Record>,
    graph_type: &str,
    series: Option<Value>,
) -> Result<Transformed> {
    let Some(chart) = StackedChart::classify(graph_type) else {
        tracing::debug!(graph_type, "chart type passes data through");
        return Ok(Transformed {
            source: dataset,
            series: SeriesList::Original(series),
        });
    };

    let config = SeriesConfig::from_series_list(series.as_ref())?;
    tracing::debug!(
        chart = chart.as_str(),
        x = %config.x,
        y = %config.y,
        category = %config.category,
        "pivoting dataset"
    );

    let table = pivot(&dataset, &config);
    let series = synthesize_series(&table.categories, &config.x, chart);
    Ok(Transformed {
        source: table.rows,
        series: SeriesList::Synthesized(series),
    })
}

/// Merge the chart configuration with the transformed dataset and series
///
/// `dataset` becomes `{"source": records}` and `series` is replaced. Every
/// other key is copied as is and keeps its position. When the series list is
/// the original and there was none, no `series` key is written.
pub fn assemble_options(config: &Map<String, Value>, transformed: Transformed) -> Result<Value> {
    let mut dataset = Map::new();
    dataset.insert(
        SOURCE_KEY.to_string(),
        serde_json::to_value(transformed.source)?,
    );
    let mut dataset = Some(Value::Object(dataset));
    let mut series = transformed.series.into_value()?;

    let mut options = Map::with_capacity(config.len() + 2);
    for (key, value) in config {
        match key.as_str() {
            DATASET_KEY => {
                if let Some(dataset) = dataset.take() {
                    options.insert(key.clone(), dataset);
                }
            }
            SERIES_KEY => {
                if let Some(series) = series.take() {
                    options.insert(key.clone(), series);
                }
            }
            _ => {
                options.insert(key.clone(), value.clone());
            }
        }
    }
    if let Some(dataset) = dataset {
        options.insert(DATASET_KEY.to_string(), dataset);
    }
    if let Some(series) = series {
        options.insert(SERIES_KEY.to_string(), series);
    }

    Ok(Value::Object(options))
}

/// Build the final chart options from a configuration and its fetched dataset
pub fn build_chart_options(
    config: &Map<String, Value>,
    dataset: Vec<Record>,
    graph_type: &str,
) -> Result<Value> {
    let series = config.get(SERIES_KEY).cloned();
    let transformed = transform(dataset, graph_type, series)?;
    assemble_options(config, transformed)
}
