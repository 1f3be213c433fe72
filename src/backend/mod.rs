//! Backend seam: the four remote operations the switcher depends on.
//!
//! Asset storage, lookup and the file-system write of the overlay all live
//! behind [`Backend`]. The runtime only ever talks to an `Arc<dyn Backend>`, so
//! the filesystem-backed [`LocalBackend`] and the scripted [`MemoryBackend`]
//! are interchangeable.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::state::types::{Competition, Country};

mod local;
mod manifest;
mod memory;

pub use local::{BACKUP_SUFFIX, LocalBackend, MARKER_SUFFIX};
pub use manifest::{Catalog, ManifestEntry};
pub use memory::MemoryBackend;

/// Shared handle used by workers.
pub type SharedBackend = Arc<dyn Backend>;

/// The remote operations consumed by the switcher.
///
/// Every failure is reported as text; it is logged and shown to the user as-is.
pub trait Backend: Send + Sync {
    /// `get_countries`: every country in the catalog, ordered for display.
    fn get_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, String>>;

    /// `get_competitions_by_country`: the competitions of one country, ordered for display.
    fn get_competitions_by_country(
        &self,
        country_id: i32,
    ) -> BoxFuture<'_, Result<Vec<Competition>, String>>;

    /// `install_competition`: write the competition's scoreboard into the game directory.
    fn install_competition(&self, competition_id: i32) -> BoxFuture<'_, Result<(), String>>;

    /// `remove_current_scoreboard`: revert to the original scoreboard; returns a user-facing message.
    fn remove_current_scoreboard(&self) -> BoxFuture<'_, Result<String, String>>;
}
