use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chart_type::{MarkType, StackedChart};
use crate::data::field_key;

/// Dataset fields a series reads for each axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEncode {
    pub x: String,
    pub y: String,
}

/// One series per category of a pivoted dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDefinition {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<Map<String, Value>>,
    pub encode: SeriesEncode,
    pub name: String,
}

impl SeriesDefinition {
    pub fn new(chart: StackedChart, x_field: &str, column: String) -> Self {
        let hints = chart.hints();
        Self {
            mark_type: chart.mark_type(),
            stack: hints.stack.map(String::from),
            area_style: hints.area_fill.then(Map::new),
            encode: SeriesEncode {
                x: x_field.to_string(),
                y: column.clone(),
            },
            name: column,
        }
    }
}

/// Build one series per category, in category order
///
/// Each series reads the category's column of the pivoted dataset and is
/// labelled with the category value itself.
pub fn synthesize_series(
    categories: &[Value],
    x_field: &str,
    chart: StackedChart,
) -> Vec<SeriesDefinition> {
    categories
        .iter()
        .map(|category| SeriesDefinition::new(chart, x_field, field_key(category)))
        .collect()
}
