//! LTA Switcher binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use lta_switcher::args::{self, Args};
use lta_switcher::backend::{LocalBackend, MemoryBackend, SharedBackend};
use lta_switcher::{app, theme};

/// Log timestamps in local time, `YYYY-MM-DD-T HH:MM:SS`.
struct SwitcherTimer;

impl tracing_subscriber::fmt::time::FormatTime for SwitcherTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing into `<config_dir>/logs/lta-switcher.log`, or stderr if that fails.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("lta-switcher.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SwitcherTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SwitcherTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = args::apply_overrides(&cli, theme::settings());
    tracing::info!(
        catalog = %settings.catalog_path.display(),
        target = %settings.install_target.display(),
        "LTA Switcher starting"
    );

    let backend: SharedBackend =
        match LocalBackend::open(&settings.catalog_path, settings.install_target.clone()) {
            Ok(b) => Arc::new(b),
            Err(e) => {
                tracing::error!(error = %e, "failed to open catalog");
                if cli.is_non_interactive() {
                    eprintln!("Failed to open catalog: {e}");
                    std::process::exit(1);
                }
                Arc::new(MemoryBackend::new(Vec::new()).failing_countries(&e))
            }
        };

    if let Some(code) = args::process_args(&cli, &backend).await {
        std::process::exit(code);
    }

    if let Err(err) = app::run(backend, settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("LTA Switcher exited");
}
