//! Filesystem backend: a catalog manifest plus the game's overlay file.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::Backend;
use super::manifest::Catalog;
use crate::state::types::{Competition, Country};

/// Suffix of the copy of the game's original overlay.
pub const BACKUP_SUFFIX: &str = ".lta-backup";
/// Suffix of the marker recording which competition is installed.
pub const MARKER_SUFFIX: &str = ".lta-installed";

/// What: Append a suffix to a file path (`overlay.BIG` → `overlay.BIG.lta-backup`).
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// What: Write a scoreboard over the game's overlay, keeping the original aside.
///
/// Inputs:
/// - `target`: Overlay file inside the game directory.
/// - `bytes`: Scoreboard content.
/// - `competition_id`: Recorded in the marker file.
///
/// Output:
/// - `Ok(())` or an error message.
///
/// Details:
/// - Creates missing parent directories.
/// - The marker is written before anything in the game directory changes, so a
///   failed marker write leaves the original overlay untouched.
/// - The first install over an original overlay copies it to `<target>.lta-backup`;
///   later installs leave that backup alone so remove always restores the game's file.
fn install_file(target: &Path, bytes: &[u8], competition_id: i32) -> Result<(), String> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        tracing::debug!(dir = %parent.display(), "[LocalBackend] creating overlay directory");
        fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating folders (permissions?): {e}"))?;
    }
    let marker = with_suffix(target, MARKER_SUFFIX);
    let backup = with_suffix(target, BACKUP_SUFFIX);
    let needs_backup = target.exists() && !marker.exists() && !backup.exists();
    fs::write(&marker, competition_id.to_string())
        .map_err(|e| format!("Disk write error: {e}"))?;
    if needs_backup {
        fs::copy(target, &backup)
            .map_err(|e| format!("Error backing up original scoreboard: {e}"))?;
        tracing::info!(backup = %backup.display(), "[LocalBackend] original overlay backed up");
    }
    fs::write(target, bytes).map_err(|e| format!("Disk write error: {e}"))?;
    Ok(())
}

/// What: Undo [`install_file`].
///
/// Inputs:
/// - `target`: Overlay file inside the game directory.
///
/// Output:
/// - User-facing message, or an error when nothing was installed.
///
/// Details:
/// - A backup without a marker (interrupted install) is still restored.
fn restore_file(target: &Path) -> Result<String, String> {
    let marker = with_suffix(target, MARKER_SUFFIX);
    let backup = with_suffix(target, BACKUP_SUFFIX);
    if !marker.is_file() && !backup.exists() {
        return Err("No custom scoreboard is installed".to_string());
    }
    let message = if backup.exists() {
        fs::rename(&backup, target)
            .map_err(|e| format!("Error restoring original scoreboard: {e}"))?;
        "Original scoreboard restored"
    } else {
        if target.exists() {
            fs::remove_file(target)
                .map_err(|e| format!("Error removing custom scoreboard: {e}"))?;
        }
        "Custom scoreboard removed"
    };
    if marker.is_file() {
        fs::remove_file(&marker).map_err(|e| format!("Error clearing install marker: {e}"))?;
    }
    Ok(message.to_string())
}

/// Backend reading a [`Catalog`] from disk and writing into the game directory.
#[derive(Clone, Debug)]
pub struct LocalBackend {
    catalog: Arc<Catalog>,
    target: Arc<PathBuf>,
}

impl LocalBackend {
    /// Build a backend over an already-loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog, target: PathBuf) -> Self {
        Self {
            catalog: Arc::new(catalog),
            target: Arc::new(target),
        }
    }

    /// What: Load `catalog.toml` and build a backend.
    ///
    /// Inputs:
    /// - `catalog_path`: Manifest location.
    /// - `target`: Overlay file to install into.
    ///
    /// Output:
    /// - Backend, or the manifest error.
    ///
    /// # Errors
    /// - See [`Catalog::load`].
    pub fn open(catalog_path: &Path, target: PathBuf) -> Result<Self, String> {
        Ok(Self::new(Catalog::load(catalog_path)?, target))
    }

    /// Overlay file this backend installs into.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// What: Run blocking filesystem work off the async runtime.
async fn blocking<T, F>(f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| format!("Backend task failed: {e}"))?
}

impl Backend for LocalBackend {
    fn get_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, String>> {
        let catalog = Arc::clone(&self.catalog);
        blocking(move || Ok(catalog.countries())).boxed()
    }

    fn get_competitions_by_country(
        &self,
        country_id: i32,
    ) -> BoxFuture<'_, Result<Vec<Competition>, String>> {
        let catalog = Arc::clone(&self.catalog);
        blocking(move || Ok(catalog.competitions_of(country_id))).boxed()
    }

    fn install_competition(&self, competition_id: i32) -> BoxFuture<'_, Result<(), String>> {
        let catalog = Arc::clone(&self.catalog);
        let target = Arc::clone(&self.target);
        blocking(move || {
            tracing::info!(competition_id, "[LocalBackend] install requested");
            let source = catalog
                .scoreboard_file(competition_id)
                .ok_or_else(|| format!("No competition found with ID {competition_id}"))?;
            let bytes = fs::read(source).map_err(|e| {
                format!("Error reading scoreboard file '{}': {e}", source.display())
            })?;
            tracing::debug!(bytes = bytes.len(), "[LocalBackend] scoreboard file loaded");
            if bytes.is_empty() {
                return Err("The scoreboard file is empty (0 bytes). Check the catalog.".to_string());
            }
            install_file(&target, &bytes, competition_id)?;
            tracing::info!(target = %target.display(), "[LocalBackend] scoreboard written");
            Ok(())
        })
        .boxed()
    }

    fn remove_current_scoreboard(&self) -> BoxFuture<'_, Result<String, String>> {
        let target = Arc::clone(&self.target);
        blocking(move || {
            let msg = restore_file(&target)?;
            tracing::info!(target = %target.display(), %msg, "[LocalBackend] scoreboard reverted");
            Ok(msg)
        })
        .boxed()
    }
}
