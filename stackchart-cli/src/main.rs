use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use stackchart_app::{ChartConfig, ChartPipeline, ChartView, StackchartAppError};
use stackchart_core::{build_chart_options, Record};
use stackchart_fetch::{
    extract_records, make_data_fetcher, DataFetcher, FetchConfig, FileDataFetcher,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build chart options from a chart configuration and its query results
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the chart's query results and print the final chart options
    Render {
        /// Path to the chart configuration (.json)
        config: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Transform a local records file without fetching anything
    Transform {
        /// Path to the chart configuration (.json)
        config: PathBuf,

        /// Path to the query results (.json)
        data: PathBuf,

        /// JSON pointer to the records array inside the data file
        #[arg(long)]
        records_pointer: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Query results URL, `{query_id}` is replaced by the chart's query id
    #[arg(long, required_unless_present = "data_dir", conflicts_with = "data_dir")]
    endpoint: Option<String>,

    /// Directory holding `<query_id>.json` files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// JSON pointer to the records array inside the response
    #[arg(long)]
    records_pointer: Option<String>,

    /// Extra request header as `NAME:VALUE`, may be repeated
    #[arg(long = "header", value_parser = parse_header, conflicts_with = "data_dir")]
    headers: Vec<(String, String)>,
}

#[derive(Args)]
struct OutputArgs {
    /// Write the options here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the options
    #[arg(long)]
    pretty: bool,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got `{s}`"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn make_fetcher(source: SourceArgs) -> Result<Arc<dyn DataFetcher>, StackchartAppError> {
    if let Some(dir) = source.data_dir {
        let mut fetcher = FileDataFetcher::new(dir);
        if let Some(pointer) = source.records_pointer {
            fetcher = fetcher.with_records_pointer(pointer);
        }
        return Ok(Arc::new(fetcher));
    }

    let endpoint = source.endpoint.ok_or_else(|| {
        StackchartAppError::InternalError("either --endpoint or --data-dir is required".to_string())
    })?;
    let config = FetchConfig {
        endpoint,
        records_pointer: source.records_pointer,
        headers: source.headers,
    };
    Ok(make_data_fetcher(&config)?)
}

fn write_options(options: &Value, output: &OutputArgs) -> Result<(), StackchartAppError> {
    let text = if output.pretty {
        serde_json::to_string_pretty(options)?
    } else {
        serde_json::to_string(options)?
    };

    match &output.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, text)?;
            info!("Saved chart options to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn render(
    config_path: &Path,
    source: SourceArgs,
    output: &OutputArgs,
) -> Result<ExitCode, StackchartAppError> {
    let config = ChartConfig::from_path(config_path)?;
    let pipeline = ChartPipeline::new(make_fetcher(source)?);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let lifecycle = rt.block_on(pipeline.run(&config));

    match lifecycle.render() {
        ChartView::Chart { options } => {
            write_options(options, output)?;
            Ok(ExitCode::SUCCESS)
        }
        ChartView::Error { message } => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        ChartView::Loading => Err(StackchartAppError::InternalError(
            "chart is still loading".to_string(),
        )),
    }
}

fn transform(
    config_path: &Path,
    data_path: &Path,
    records_pointer: Option<&str>,
    output: &OutputArgs,
) -> Result<ExitCode, StackchartAppError> {
    let config = ChartConfig::from_path(config_path)?;
    let body: Value = serde_json::from_str(&fs::read_to_string(data_path)?)?;
    let records: Vec<Record> = extract_records(body, records_pointer)?;

    let options = build_chart_options(&config.echart_config, records, &config.graph_type)?;
    write_options(&options, output)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, StackchartAppError> {
    // Logging goes to stderr so stdout only carries the options
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            source,
            output,
        } => render(&config, source, &output),
        Commands::Transform {
            config,
            data,
            records_pointer,
            output,
        } => transform(&config, &data, records_pointer.as_deref(), &output),
    }
}
