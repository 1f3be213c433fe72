//! Core value types used by LTA Switcher state.

use serde::{Deserialize, Serialize};

/// A country as listed by the backend.
///
/// Created fresh on every fetch; the flag is an SVG document carried as raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Identifier, unique and stable for the session.
    pub id: i32,
    /// Display label.
    pub name: String,
    /// Raw SVG bytes for the flag (may be empty).
    #[serde(default)]
    pub flag_blob: Vec<u8>,
}

/// A competition belonging to the country whose fetch produced it.
///
/// The parent country is not stored here; it is implied by the selection
/// context that requested the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// Identifier, unique within its parent country's result set.
    pub id: i32,
    /// Display label.
    pub name: String,
    /// Raw logo bytes (raster, treated opaquely; may be empty).
    #[serde(default)]
    pub logo_blob: Vec<u8>,
}

/// Request for the competitions of one country.
///
/// `generation` is the selection generation at the time the request was
/// issued; the reply is only applied while it is still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompetitionsRequest {
    /// Selection generation that issued the request.
    pub generation: u64,
    /// Country whose competitions are wanted.
    pub country_id: i32,
}

/// Work items accepted by the catalog worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Fetch the full country list.
    Countries,
    /// Fetch the competitions of one country.
    Competitions(CompetitionsRequest),
}

/// Reply to a [`CompetitionsRequest`].
#[derive(Clone, Debug)]
pub struct CompetitionsReply {
    /// Echoed generation from the originating request.
    pub generation: u64,
    /// Echoed country id from the originating request.
    pub country_id: i32,
    /// Backend result.
    pub result: Result<Vec<Competition>, String>,
}

/// Results delivered by the catalog worker back to the event loop.
#[derive(Clone, Debug)]
pub enum CatalogReply {
    /// Outcome of `get_countries`.
    Countries(Result<Vec<Country>, String>),
    /// Outcome of `get_competitions_by_country`.
    Competitions(CompetitionsReply),
}

/// Work items accepted by the install worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallRequest {
    /// Install the scoreboard of the given competition.
    Apply {
        /// Competition to install.
        competition_id: i32,
    },
    /// Restore the original scoreboard.
    Remove,
}

/// Outcomes delivered by the install worker back to the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `install_competition` finished.
    Applied(Result<(), String>),
    /// The post-apply settle delay elapsed; the progress indicator may stop.
    ApplySettled,
    /// `remove_current_scoreboard` finished with the backend's message.
    Removed(Result<String, String>),
}

/// Which selector currently has keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Country list (left, top).
    #[default]
    Countries,
    /// Competition list (left, bottom).
    Competitions,
}
