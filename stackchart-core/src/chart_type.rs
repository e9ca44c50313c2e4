//! Classification of chart type identifiers
//!
//! Only the stacked chart kinds need their data pivoted into one column per
//! category. Every other identifier is passed through untouched.

use serde::{Deserialize, Serialize};

/// Stack group shared by every synthesized series
pub const STACK_ALL: &str = "all";

/// Base mark used to draw each synthesized series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Line,
    Bar,
}

/// Chart-type specific options applied to every synthesized series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderHints {
    pub stack: Option<&'static str>,
    pub area_fill: bool,
}

/// Chart types whose dataset must be pivoted before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackedChart {
    Area,
    Line,
    Column,
}

impl StackedChart {
    /// Classify a chart type identifier, `None` means no pivot is needed
    pub fn classify(graph_type: &str) -> Option<Self> {
        match graph_type {
            "stacked_area_chart" => Some(Self::Area),
            "stacked_line_chart" => Some(Self::Line),
            "stacked_column_chart" => Some(Self::Column),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "stacked_area_chart",
            Self::Line => "stacked_line_chart",
            Self::Column => "stacked_column_chart",
        }
    }

    pub fn mark_type(&self) -> MarkType {
        match self {
            Self::Area | Self::Line => MarkType::Line,
            Self::Column => MarkType::Bar,
        }
    }

    pub fn hints(&self) -> RenderHints {
        match self {
            Self::Area => RenderHints {
                stack: Some(STACK_ALL),
                area_fill: true,
            },
            Self::Line => RenderHints::default(),
            Self::Column => RenderHints {
                stack: Some(STACK_ALL),
                area_fill: false,
            },
        }
    }
}
