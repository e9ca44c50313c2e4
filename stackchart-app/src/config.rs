use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StackchartAppError;

/// Declarative description of one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Base chart options, `series[0]` names the pivot fields of stacked charts
    #[serde(default)]
    pub echart_config: Map<String, Value>,
    pub query_id: String,
    pub graph_type: String,
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self, StackchartAppError> {
        serde_json::from_str(s).map_err(StackchartAppError::InvalidConfig)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StackchartAppError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The original series list, if any
    pub fn series(&self) -> Option<&Value> {
        self.echart_config.get("series")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_config() {
        let config = ChartConfig::from_json_str(
            r#"{
                "echart_config": {"series": [{"x": "month", "y": "sales", "category": "region"}]},
                "query_id": "sales",
                "graph_type": "stacked_column_chart"
            }"#,
        )
        .unwrap();
        assert_eq!(config.query_id, "sales");
        assert_eq!(config.graph_type, "stacked_column_chart");
        assert_eq!(
            config.series(),
            Some(&json!([{"x": "month", "y": "sales", "category": "region"}]))
        );
    }

    #[test]
    fn test_echart_config_defaults_to_empty() {
        let config =
            ChartConfig::from_json_str(r#"{"query_id": "q", "graph_type": "bar"}"#).unwrap();
        assert!(config.echart_config.is_empty());
        assert_eq!(config.series(), None);
    }

    #[test]
    fn test_missing_query_id_is_invalid() {
        let err = ChartConfig::from_json_str(r#"{"graph_type": "bar"}"#).unwrap_err();
        assert!(matches!(err, StackchartAppError::InvalidConfig(_)));
    }
}
