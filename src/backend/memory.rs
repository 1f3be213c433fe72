//! Scripted in-memory backend for headless runs and tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::Backend;
use crate::state::types::{Competition, Country};

/// Mutable script and call log.
#[derive(Debug, Default)]
struct Script {
    countries: Vec<Country>,
    countries_error: Option<String>,
    competitions: HashMap<i32, Vec<Competition>>,
    competition_delays: HashMap<i32, Duration>,
    failing_competitions: HashMap<i32, String>,
    install_error: Option<String>,
    remove_result: Option<Result<String, String>>,
    installs: Vec<i32>,
    removes: usize,
    competition_requests: Vec<i32>,
}

/// Backend answering from a script held in memory.
///
/// Competition replies can be delayed per country to reproduce out-of-order
/// arrival, and every install/remove call is recorded.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    script: Mutex<Script>,
}

impl MemoryBackend {
    /// Backend with the given countries and nothing else.
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            script: Mutex::new(Script {
                countries,
                ..Script::default()
            }),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        let mut guard = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Set the competitions returned for a country.
    #[must_use]
    pub fn with_competitions(self, country_id: i32, competitions: Vec<Competition>) -> Self {
        self.with(|s| s.competitions.insert(country_id, competitions));
        self
    }

    /// Delay the competition reply for a country.
    #[must_use]
    pub fn with_competition_delay(self, country_id: i32, delay: Duration) -> Self {
        self.with(|s| s.competition_delays.insert(country_id, delay));
        self
    }

    /// Make `get_countries` fail.
    #[must_use]
    pub fn failing_countries(self, message: &str) -> Self {
        self.with(|s| s.countries_error = Some(message.to_string()));
        self
    }

    /// Make `get_competitions_by_country` fail for one country.
    #[must_use]
    pub fn failing_competitions(self, country_id: i32, message: &str) -> Self {
        self.with(|s| s.failing_competitions.insert(country_id, message.to_string()));
        self
    }

    /// Make `install_competition` fail.
    #[must_use]
    pub fn failing_install(self, message: &str) -> Self {
        self.with(|s| s.install_error = Some(message.to_string()));
        self
    }

    /// Script the outcome of `remove_current_scoreboard`.
    #[must_use]
    pub fn with_remove_result(self, result: Result<String, String>) -> Self {
        self.with(|s| s.remove_result = Some(result));
        self
    }

    /// Competition ids passed to `install_competition`, in call order.
    #[must_use]
    pub fn installs(&self) -> Vec<i32> {
        self.with(|s| s.installs.clone())
    }

    /// Number of `remove_current_scoreboard` calls.
    #[must_use]
    pub fn removes(&self) -> usize {
        self.with(|s| s.removes)
    }

    /// Country ids passed to `get_competitions_by_country`, in call order.
    #[must_use]
    pub fn competition_requests(&self) -> Vec<i32> {
        self.with(|s| s.competition_requests.clone())
    }
}

impl Backend for MemoryBackend {
    fn get_countries(&self) -> BoxFuture<'_, Result<Vec<Country>, String>> {
        let result = self.with(|s| {
            s.countries_error
                .clone()
                .map_or_else(|| Ok(s.countries.clone()), Err)
        });
        async move { result }.boxed()
    }

    fn get_competitions_by_country(
        &self,
        country_id: i32,
    ) -> BoxFuture<'_, Result<Vec<Competition>, String>> {
        let (delay, result) = self.with(|s| {
            s.competition_requests.push(country_id);
            let delay = s.competition_delays.get(&country_id).copied();
            let result = s.failing_competitions.get(&country_id).map_or_else(
                || Ok(s.competitions.get(&country_id).cloned().unwrap_or_default()),
                |msg| Err(msg.clone()),
            );
            (delay, result)
        });
        async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            result
        }
        .boxed()
    }

    fn install_competition(&self, competition_id: i32) -> BoxFuture<'_, Result<(), String>> {
        let result = self.with(|s| {
            s.installs.push(competition_id);
            s.install_error.clone().map_or(Ok(()), Err)
        });
        async move { result }.boxed()
    }

    fn remove_current_scoreboard(&self) -> BoxFuture<'_, Result<String, String>> {
        let result = self.with(|s| {
            s.removes += 1;
            s.remove_result
                .clone()
                .unwrap_or_else(|| Ok("Original scoreboard restored".to_string()))
        });
        async move { result }.boxed()
    }
}
