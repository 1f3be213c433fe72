//! Cascading country → competition selection.

use crate::state::types::{Competition, CompetitionsRequest, Country};

/// What: Parse a selector value into a numeric id.
///
/// Inputs:
/// - `text`: Raw selector value (may be empty).
///
/// Output:
/// - `Some(id)` for a parseable non-zero id; `None` for empty, zero, or garbage.
fn parse_id(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok().filter(|id| *id != 0)
}

/// Selection state for the two cascading selectors.
///
/// All mutation goes through [`SelectionStore::set_country`],
/// [`SelectionStore::set_competition`] and the `apply_*` completions so the
/// reset invariants hold at every point the UI can observe:
///
/// - `competitions` only ever holds the reply for the current country.
/// - Choosing a country clears the competition list and selection before the
///   new fetch resolves.
/// - `selected_competition` is either an entry of `competitions` or `None`.
#[derive(Debug, Default)]
pub struct SelectionStore {
    selected_country_id: String,
    countries: Vec<Country>,
    competitions: Vec<Competition>,
    selected_competition_id: String,
    selected_competition: Option<Competition>,
    generation: u64,
}

impl SelectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw id text of the selected country (empty when none).
    #[must_use]
    pub fn selected_country_id(&self) -> &str {
        &self.selected_country_id
    }

    /// Countries from the latest successful country fetch.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Competitions of the selected country, as last fetched.
    #[must_use]
    pub fn competitions(&self) -> &[Competition] {
        &self.competitions
    }

    /// Raw id text of the selected competition (empty when none).
    #[must_use]
    pub fn selected_competition_id(&self) -> &str {
        &self.selected_competition_id
    }

    /// Detail of the selected competition, if the id resolved.
    #[must_use]
    pub const fn selected_competition(&self) -> Option<&Competition> {
        self.selected_competition.as_ref()
    }

    /// Current selection generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The selected country entity, looked up from the country list.
    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        let id = parse_id(&self.selected_country_id)?;
        self.countries.iter().find(|c| c.id == id)
    }

    /// Whether a country is selected (non-empty id text).
    #[must_use]
    pub fn has_country(&self) -> bool {
        !self.selected_country_id.is_empty()
    }

    /// Replace the country list with a fresh fetch result.
    pub fn apply_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    /// What: Select a country and reset everything downstream of it.
    ///
    /// Inputs:
    /// - `country_id_text`: Selector value; empty means "no selection".
    ///
    /// Output:
    /// - `Some(CompetitionsRequest)` when the id is a non-zero number and the caller
    ///   must dispatch a competition fetch; `None` otherwise.
    ///
    /// Details:
    /// - Synchronously clears competitions, the selected competition id and its detail.
    /// - Bumps the generation on every call so replies to earlier selections are
    ///   discarded by [`SelectionStore::apply_competitions`], regardless of the order
    ///   in which they resolve.
    pub fn set_country(&mut self, country_id_text: &str) -> Option<CompetitionsRequest> {
        self.selected_country_id = country_id_text.to_string();
        self.competitions.clear();
        self.selected_competition_id.clear();
        self.selected_competition = None;
        self.generation = self.generation.wrapping_add(1);
        parse_id(country_id_text).map(|country_id| CompetitionsRequest {
            generation: self.generation,
            country_id,
        })
    }

    /// What: Install a competition fetch result if it still belongs to the current selection.
    ///
    /// Inputs:
    /// - `generation`: Generation echoed back from the request.
    /// - `competitions`: Fetched list.
    ///
    /// Output:
    /// - `true` when the list was applied; `false` when it was stale and dropped.
    pub fn apply_competitions(&mut self, generation: u64, competitions: Vec<Competition>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.competitions = competitions;
        self.selected_competition_id.clear();
        self.selected_competition = None;
        true
    }

    /// What: Select a competition by id text.
    ///
    /// Inputs:
    /// - `competition_id_text`: Selector value.
    ///
    /// Output:
    /// - None; the detail becomes the matching entry, or `None` for an unknown/stale id.
    pub fn set_competition(&mut self, competition_id_text: &str) {
        self.selected_competition_id = competition_id_text.to_string();
        self.selected_competition = competition_id_text
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|id| self.competitions.iter().find(|c| c.id == id))
            .cloned();
    }
}
