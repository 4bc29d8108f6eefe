use std::path::PathBuf;

use anyhow::Result;
use capdash::config::AppConfig;
use capdash::models::YearMonth;
use capdash::upload::UploadedFile;
use capdash::{UploadSession, ViewStatus, version};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Load resource-utilization CSV files and print the capacity dashboard as JSON.
#[derive(Debug, Parser)]
#[command(name = "capdash", version)]
struct Args {
    /// Config file (defaults to $CONFIG_FILE, then ./config.toml, then built-in defaults).
    #[arg(long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Date key to show in the selected-day detail (e.g. 2024-03-15).
    #[arg(long)]
    select: Option<String>,

    /// Calendar page to render, as YYYY-MM.
    #[arg(long)]
    month: Option<YearMonth>,

    /// Print compact JSON regardless of config.
    #[arg(long)]
    compact: bool,

    /// CSV files, uploaded in order; each successful one replaces the previous.
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    tracing::info!(generator = %version::generator(), files = args.files.len(), "starting");

    let session = UploadSession::new(config);
    for path in &args.files {
        let file = match UploadedFile::from_path(path).await {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "skipping file");
                continue;
            }
        };
        if let Ok(n) = session.upload(file).await {
            tracing::info!(path = %path.display(), records = n, "loaded");
        }
    }
    if args.select.is_some() {
        session.select_date(args.select.as_deref());
    }

    let view = session.view(args.month);
    if view.status == ViewStatus::NoData {
        tracing::warn!("no dated records loaded; dashboard is empty");
    }

    let output = serde_json::json!({
        "generator": version::generator(),
        "dashboard": view,
    });
    let json = if session.config().output.pretty && !args.compact {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}
