//! kinship binary
//!
//! Analyzes one account from a snapshot export and prints the report as JSON.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use kinship_analyzer::{Analyzer, AnalyzerConfig, View};
use kinship_layout::Canvas;
use kinship_source::SnapshotSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kinship")]
#[command(about = "Rank and lay out the people who matter most to an account")]
#[command(version)]
struct Cli {
    /// Snapshot JSON export
    snapshot: PathBuf,

    /// Account handle or id to analyze
    handle: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Reference time for decay, RFC 3339 (defaults to now)
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// JSON config file; missing fields take defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Items per source page
    #[arg(long, default_value_t = kinship_source::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Part of the report to print
    #[arg(long, value_enum, default_value_t = ViewArg::All)]
    view: ViewArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Ranked,
    Family,
    Radial,
    All,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Ranked => View::Ranked,
            ViewArg::Family => View::Family,
            ViewArg::Radial => View::Radial,
            ViewArg::All => View::All,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinship=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::from_path(path)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = Analyzer::new(config)?;
    let source = SnapshotSource::from_path(&cli.snapshot)?.with_page_size(cli.page_size);
    let now = cli.now.unwrap_or_else(Utc::now);

    let report = analyzer.analyze(
        &source,
        &cli.handle,
        now,
        Canvas::new(cli.width, cli.height),
        &mut |p| tracing::debug!(channel = %p.channel, current = p.current, total = p.total, "fetching"),
    )?;

    let out = report.view(cli.view.into())?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
