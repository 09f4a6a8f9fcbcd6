// File: crates/dashboard-demo/src/main.rs
// Summary: Demo loads a metric payload (JSON, legacy JSON or CSV/TSV), reshapes it for a chart type
// and writes the derived view as JSON; `query` prints the data request for a metric.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dashboard_core::{
    append_page, import, ChartKind, DateRange, Interval, MetricQuery, ReshapeOptions, RowMajorPayload, Stat,
    TabularPayload,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dashboard-demo", about = "Reshape metric payloads into chart-ready views")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reshape a payload file for a chart type and print the view.
    Reshape(ReshapeArgs),
    /// Print the data query for a metric, optionally paged.
    Query(QueryArgs),
}

#[derive(Args)]
struct ReshapeArgs {
    /// Payload file (.json, .csv or .tsv).
    #[arg(default_value = "crates/dashboard-demo/data/sample_metric.json")]
    input: PathBuf,
    /// Chart type: bar, hbar, line or table.
    #[arg(long, default_value = "line")]
    chart: ChartKind,
    /// Extra facets as JSON, e.g. '{"rows": true, "yMinMax": true}'.
    #[arg(long)]
    options: Option<String>,
    /// Input is the row-major `headers`/`values` format.
    #[arg(long)]
    legacy: bool,
    /// Number of leading x columns in CSV/TSV input.
    #[arg(long, default_value_t = 1)]
    x_columns: usize,
    /// Further pages to append before reshaping.
    #[arg(long)]
    append: Vec<PathBuf>,
    /// Write the view here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct QueryArgs {
    /// Metric id.
    id: String,
    #[arg(long, default_value = "line")]
    chart: ChartKind,
    #[arg(long)]
    stat: Option<Stat>,
    #[arg(long)]
    interval: Option<Interval>,
    /// Range start, epoch milliseconds.
    #[arg(long, requires = "end")]
    start: Option<i64>,
    /// Range end, epoch milliseconds.
    #[arg(long, requires = "start")]
    end: Option<i64>,
    /// Move the range before printing.
    #[arg(long, value_enum, requires = "start")]
    page: Option<Page>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    Prev,
    Next,
    PrevDay,
    NextDay,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Reshape(args) => run_reshape(&args),
        Command::Query(args) => {
            println!("{}", build_query(&args).to_query());
            Ok(())
        }
    }
}

fn run_reshape(args: &ReshapeArgs) -> Result<()> {
    let mut payload = load_payload(&args.input, args)?;
    for page_path in &args.append {
        let page = load_payload(page_path, args)?;
        payload = append_page(&payload, &page)
            .with_context(|| format!("failed to append page '{}'", page_path.display()))?;
    }
    info!(rows = payload.row_count(), chart = %args.chart, "loaded payload");

    let extra = match &args.options {
        Some(json) => serde_json::from_str::<ReshapeOptions>(json).context("invalid --options JSON")?,
        None => ReshapeOptions::default(),
    };
    let view = args
        .chart
        .render(&payload, &extra)
        .with_context(|| format!("failed to reshape '{}'", args.input.display()))?;
    if view.is_empty() {
        warn!("empty data set; select a different time range");
    }

    let json = if args.pretty { view.to_json_pretty()? } else { view.to_json()? };
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
            info!(path = %out.display(), "wrote view");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn load_payload(path: &Path, args: &ReshapeArgs) -> Result<TabularPayload> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let payload = match ext.as_str() {
        "csv" | "tsv" => import::from_path(path, args.x_columns)?,
        _ => {
            let body = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            if args.legacy {
                RowMajorPayload::from_json_str(&body)?.to_tabular()?
            } else {
                TabularPayload::from_json_str(&body)?
            }
        }
    };
    Ok(payload)
}

fn build_query(args: &QueryArgs) -> MetricQuery {
    let mut query = MetricQuery::new(args.chart, args.id.clone());
    query.stat = args.stat;
    query.interval = args.interval;
    if let (Some(start), Some(end)) = (args.start, args.end) {
        let range = DateRange::new(start, end);
        let range = match args.page {
            Some(Page::Prev) => range.previous(),
            Some(Page::Next) => range.next(),
            Some(Page::PrevDay) => range.previous_day(),
            Some(Page::NextDay) => range.next_day(),
            None => range,
        };
        query = query.with_range(range);
    }
    query
}
