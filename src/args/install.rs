//! Command-line install and restore.

use crate::args::utils::parse_competition_id;
use crate::backend::SharedBackend;

/// What: Handle `--install <ID>` by installing one competition's scoreboard.
///
/// Inputs:
/// - `backend`: Backend that performs the install.
/// - `id_text`: Raw competition id from the command line.
///
/// Output:
/// - Process exit code: 0 on success, 2 for a malformed id, 1 on backend failure.
pub async fn handle_install(backend: &SharedBackend, id_text: &str) -> i32 {
    let competition_id = match parse_competition_id(id_text) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            return 2;
        }
    };
    tracing::info!(competition_id, "Install requested from CLI");
    match backend.install_competition(competition_id).await {
        Ok(()) => {
            println!("Scoreboard installed successfully");
            0
        }
        Err(e) => {
            eprintln!("Error installing scoreboard: {e}");
            tracing::error!(competition_id, error = %e, "CLI install failed");
            1
        }
    }
}

/// What: Handle `--restore` by reverting to the original scoreboard.
///
/// Inputs:
/// - `backend`: Backend that performs the removal.
///
/// Output:
/// - Process exit code: 0 on success, 1 on failure.
pub async fn handle_restore(backend: &SharedBackend) -> i32 {
    tracing::info!("Restore requested from CLI");
    match backend.remove_current_scoreboard().await {
        Ok(msg) => {
            println!("{msg}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "CLI restore failed");
            1
        }
    }
}
