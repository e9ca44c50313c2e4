pub mod chart_type;
pub mod data;
pub mod error;
pub mod options;
pub mod pivot;
pub mod series;

pub use chart_type::{MarkType, RenderHints, StackedChart};
pub use data::{field_key, Record};
pub use error::StackchartCoreError;
pub use options::{assemble_options, build_chart_options, transform, SeriesList, Transformed};
pub use pivot::{pivot, PivotTable, SeriesConfig};
pub use series::{synthesize_series, SeriesDefinition, SeriesEncode};
