//! Reshape long-form records into one wide record per x value
//!
//! Given records such as
//!
//! ```text
//! {month: "Jan", region: "East", sales: 10}
//! {month: "Jan", region: "West", sales: 5}
//! {month: "Feb", region: "East", sales: 7}
//! ```
//!
//! and the config `{x: "month", y: "sales", category: "region"}`, the pivot
//! produces
//!
//! ```text
//! {month: "Jan", East: 10, West: 5}
//! {month: "Feb", East: 7, West: 0}
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{field_key, identity_key, Record};
use crate::error::{Result, StackchartCoreError};

/// Names of the three fields that drive the pivot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub x: String,
    pub y: String,
    pub category: String,
}

impl SeriesConfig {
    pub fn new(x: impl Into<String>, y: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            category: category.into(),
        }
    }

    /// Read the pivot fields from the first entry of a chart's series list
    ///
    /// Entries after the first are ignored.
    pub fn from_series_list(series: Option<&Value>) -> Result<Self> {
        let first = match series {
            None | Some(Value::Null) => {
                return Err(StackchartCoreError::Configuration(
                    "stacked charts require a series configuration".to_string(),
                ))
            }
            Some(Value::Array(entries)) => entries.first().ok_or_else(|| {
                StackchartCoreError::Configuration(
                    "stacked charts require a non-empty series list".to_string(),
                )
            })?,
            Some(_) => {
                return Err(StackchartCoreError::Configuration(
                    "series configuration must be a list".to_string(),
                ))
            }
        };

        Self::deserialize(first).map_err(|err| {
            StackchartCoreError::Configuration(format!(
                "first series entry must name x, y and category fields: {err}"
            ))
        })
    }
}

/// Wide records plus the category values that became their columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PivotTable {
    pub rows: Vec<Record>,
    pub categories: Vec<Value>,
}

/// Pivot `dataset` into one record per distinct x value
///
/// Rows follow the first-seen order of x values and columns the first-seen
/// order of category values. A cell holds the y value of the first record
/// matching its (x, category) pair, or `0` when no record matches. Later
/// duplicates of a pair are ignored.
pub fn pivot(dataset: &[Record], config: &SeriesConfig) -> PivotTable {
    let categories = ordered_unique(dataset, &config.category);
    let x_values = ordered_unique(dataset, &config.x);

    // x identity -> category identity -> first matching record
    let mut first_match: HashMap<String, HashMap<String, &Record>> = HashMap::new();
    for record in dataset {
        first_match
            .entry(identity_key(record.get_or_null(&config.x)))
            .or_default()
            .entry(identity_key(record.get_or_null(&config.category)))
            .or_insert(record);
    }

    let columns: Vec<(String, String)> = categories
        .iter()
        .map(|category| (identity_key(category), field_key(category)))
        .collect();

    let rows = x_values
        .into_iter()
        .map(|x_value| {
            let matches = first_match.get(&identity_key(&x_value));
            let mut row = Record::with_capacity(columns.len() + 1);
            row.insert(config.x.as_str(), x_value);
            for (category_id, column) in &columns {
                let cell = matches
                    .and_then(|by_category| by_category.get(category_id))
                    .map(|record| record.get_or_null(&config.y).clone())
                    .unwrap_or_else(|| Value::from(0));
                row.insert(column.as_str(), cell);
            }
            row
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        rows = rows.len(),
        categories = categories.len(),
        input = dataset.len(),
        "pivoted dataset"
    );

    PivotTable { rows, categories }
}

/// Distinct values of `field` in first-seen order, a missing field counting as `null`
fn ordered_unique(dataset: &[Record], field: &str) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for record in dataset {
        let value = record.get_or_null(field);
        if seen.insert(identity_key(value)) {
            ordered.push(value.clone());
        }
    }
    ordered
}
