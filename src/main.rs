//! CLI entry point for the launch dashboard.
//!
//! Loads the launch dataset once, applies one site / payload selection and
//! prints the resulting summary, breakdowns or scatter points for a renderer.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use launch_dash::aggregator::Aggregator;
use launch_dash::aggregator::filter::{
    ALL_SITES, FilterSelection, KNOWN_SITES, PayloadRange, SiteFilter, SummaryScope,
};
use launch_dash::{
    config::DashConfig,
    dataset::load_dataset,
    output::{print_json, print_pretty},
};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt::Debug;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Range used when the dataset is empty and no range was given.
const SLIDER_RANGE: PayloadRange = PayloadRange {
    min: 0.0,
    max: 10000.0,
};

#[derive(Parser)]
#[command(name = "launch_dash")]
#[command(about = "Summary counts and chart data for SpaceX launch records", long_about = None)]
struct Cli {
    /// Dataset path or URL (defaults to LAUNCH_DATASET, then the public dataset)
    #[arg(short, long, global = true, value_name = "FILE_OR_URL")]
    source: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Total launches, successes and failures plus payload bounds
    Summary {
        /// Launch site or ALL
        #[arg(long, default_value = ALL_SITES)]
        site: SiteFilter,

        /// Count the whole dataset or only the selected site
        #[arg(long, value_enum, default_value_t = SummaryScope::Dataset)]
        summary_scope: SummaryScope,
    },
    /// Pie data: successes per site, or success/failure for one site
    SiteBreakdown {
        #[arg(long, default_value = ALL_SITES)]
        site: SiteFilter,
    },
    /// Payload vs. outcome points
    Scatter {
        #[arg(long, default_value = ALL_SITES)]
        site: SiteFilter,

        /// Inclusive payload range in kg, e.g. 0,10000 (defaults to dataset bounds)
        #[arg(short, long, value_name = "MIN,MAX")]
        payload: Option<PayloadRange>,
    },
    /// Bar data: successes per booster version category
    Boosters {
        #[arg(long, default_value = ALL_SITES)]
        site: SiteFilter,
    },
    /// Every view for one selection
    Dashboard {
        #[arg(long, default_value = ALL_SITES)]
        site: SiteFilter,

        #[arg(short, long, value_name = "MIN,MAX")]
        payload: Option<PayloadRange>,

        #[arg(long, value_enum, default_value_t = SummaryScope::Dataset)]
        summary_scope: SummaryScope,
    },
    /// List selectable launch sites
    Sites,
}

#[derive(Debug, Serialize)]
struct SiteOption<'a> {
    label: &'a str,
    value: &'a str,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = DashConfig::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_path = Path::new(&config.log_file_path);
    let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_path
        .file_name()
        .unwrap_or(OsStr::new("launch_dash.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let source = cli.source.unwrap_or(config.dataset_source);
    let aggregator = Aggregator::new(load_dataset(&source).await?);
    let format = cli.format;

    match cli.command {
        Commands::Summary {
            site,
            summary_scope,
        } => {
            let summary = aggregator.summary_scoped(&site, summary_scope);
            info!(
                %site,
                total = summary.counts.total_launches,
                success = summary.counts.total_success,
                failures = summary.counts.total_failures,
                "Summary computed"
            );
            emit(format, &summary)?;
        }
        Commands::SiteBreakdown { site } => {
            let breakdown = aggregator.site_breakdown(&site);
            warn_if_empty(&site, breakdown.is_empty());
            emit(format, &breakdown)?;
        }
        Commands::Scatter { site, payload } => {
            let range = payload.unwrap_or_else(|| dataset_range(&aggregator));
            let points = aggregator.scatter(&site, range);
            info!(%site, payload_range = %range, points = points.len(), "Scatter computed");
            warn_if_empty(&site, points.is_empty());
            emit(format, &points)?;
        }
        Commands::Boosters { site } => {
            let breakdown = aggregator.booster_breakdown(&site);
            warn_if_empty(&site, breakdown.is_empty());
            emit(format, &breakdown)?;
        }
        Commands::Dashboard {
            site,
            payload,
            summary_scope,
        } => {
            let range = payload.unwrap_or_else(|| dataset_range(&aggregator));
            let selection = FilterSelection::new(site, range);
            let dashboard = aggregator.dashboard_scoped(&selection, summary_scope);
            warn_if_empty(&selection.site, dashboard.booster_breakdown.is_empty());
            emit(format, &dashboard)?;
        }
        Commands::Sites => {
            let mut options = vec![SiteOption {
                label: "All Sites",
                value: ALL_SITES,
            }];
            options.extend(KNOWN_SITES.iter().map(|s| SiteOption { label: s, value: s }));

            for site in aggregator.sites() {
                if !KNOWN_SITES.contains(&site) {
                    options.push(SiteOption {
                        label: site,
                        value: site,
                    });
                }
            }
            emit(format, &options)?;
        }
    }

    Ok(())
}

/// Payload bounds of the whole dataset, as the range slider is reset to.
fn dataset_range(aggregator: &Aggregator) -> PayloadRange {
    aggregator
        .summary(&SiteFilter::All)
        .payload_bounds
        .unwrap_or(SLIDER_RANGE)
}

fn warn_if_empty(site: &SiteFilter, empty: bool) {
    if empty {
        warn!(%site, "No launch records match the selection");
    }
}

fn emit<T: Serialize + Debug>(format: Format, value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Json => print_json(&mut stdout, value),
        Format::Pretty => print_pretty(&mut stdout, value),
    }
}
