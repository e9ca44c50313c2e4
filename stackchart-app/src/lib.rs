pub mod config;
pub mod error;
pub mod lifecycle;
pub mod pipeline;

pub use config::ChartConfig;
pub use error::StackchartAppError;
pub use lifecycle::{render, ChartLifecycle, ChartState, ChartView};
pub use pipeline::{ChartPipeline, FAILURE_NOTICE};
