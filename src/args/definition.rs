//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::backend::SharedBackend;
use crate::theme::Settings;

/// LTA Switcher - pick a country and a competition, then install its scoreboard overlay
#[derive(Parser, Debug, Default)]
#[command(name = "lta-switcher")]
#[command(version)]
#[command(about = "Switch the FC 26 Live Editor scoreboard overlay between competitions", long_about = None)]
pub struct Args {
    /// Catalog manifest to read countries, competitions and scoreboards from
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Overlay file the scoreboard is written to
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print every country with its competitions and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print the listing as JSON (use with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Install the scoreboard of a competition by id and exit
    #[arg(short, long, value_name = "ID", conflicts_with = "restore")]
    pub install: Option<String>,

    /// Restore the original scoreboard and exit
    #[arg(short, long)]
    pub restore: bool,
}

impl Args {
    /// Whether any flag asks for a non-interactive run.
    #[must_use]
    pub const fn is_non_interactive(&self) -> bool {
        self.list || self.install.is_some() || self.restore
    }
}

/// What: Apply path overrides from the command line on top of the settings file.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from `settings.conf`.
///
/// Output:
/// - Settings with `--catalog` / `--target` applied.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(path) = &args.catalog {
        tracing::debug!(path = %path.display(), "catalog path overridden from CLI");
        settings.catalog_path.clone_from(path);
    }
    if let Some(path) = &args.target {
        tracing::debug!(path = %path.display(), "install target overridden from CLI");
        settings.install_target.clone_from(path);
    }
    settings
}

/// What: Run the non-interactive mode requested on the command line, if any.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `backend`: Backend the mode runs against.
///
/// Output:
/// - `Some(exit_code)` when a mode ran and the process should exit; `None` to start the TUI.
///
/// Details:
/// - `--list` takes precedence, then `--install`, then `--restore`.
pub async fn process_args(args: &Args, backend: &SharedBackend) -> Option<i32> {
    use crate::args::{install, list};

    if args.list {
        return Some(list::handle_list(backend, args.json).await);
    }
    if let Some(id) = &args.install {
        return Some(install::handle_install(backend, id).await);
    }
    if args.restore {
        return Some(install::handle_restore(backend).await);
    }
    None
}
