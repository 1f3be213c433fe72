//! Command-line listing of the catalog.

use std::fmt::Write as _;

use serde::Serialize;

use crate::backend::SharedBackend;
use crate::state::{Competition, Country};

/// One country with its competitions, as printed by `--list --json`.
#[derive(Debug, Serialize)]
pub struct CountryListing {
    /// Country id.
    pub id: i32,
    /// Country name.
    pub name: String,
    /// Competitions of the country, without image bytes.
    pub competitions: Vec<CompetitionListing>,
}

/// A competition entry in a [`CountryListing`].
#[derive(Debug, Serialize)]
pub struct CompetitionListing {
    /// Competition id (the value `--install` expects).
    pub id: i32,
    /// Competition name.
    pub name: String,
}

impl CountryListing {
    fn new(country: &Country, competitions: &[Competition]) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            competitions: competitions
                .iter()
                .map(|c| CompetitionListing {
                    id: c.id,
                    name: c.name.clone(),
                })
                .collect(),
        }
    }
}

/// What: Render listings as indented plain text.
///
/// Output:
/// - One line per country, competitions indented beneath with their ids.
#[must_use]
pub fn render_text(listings: &[CountryListing]) -> String {
    let mut out = String::new();
    for country in listings {
        let _ = writeln!(out, "{} (#{})", country.name, country.id);
        if country.competitions.is_empty() {
            out.push_str("    (no competitions)\n");
        }
        for comp in &country.competitions {
            let _ = writeln!(out, "    {:>5}  {}", comp.id, comp.name);
        }
    }
    out
}

/// What: Fetch the whole catalog through the backend.
///
/// Inputs:
/// - `backend`: Backend to query.
///
/// Output:
/// - Listings in backend order, or the first error.
///
/// # Errors
/// - Propagates the backend's error text.
pub async fn collect_listings(backend: &SharedBackend) -> Result<Vec<CountryListing>, String> {
    let countries = backend.get_countries().await?;
    let mut listings = Vec::with_capacity(countries.len());
    for country in &countries {
        let comps = backend.get_competitions_by_country(country.id).await?;
        listings.push(CountryListing::new(country, &comps));
    }
    Ok(listings)
}

/// What: Handle `--list` by printing the catalog to stdout.
///
/// Inputs:
/// - `backend`: Backend to query.
/// - `json`: Print JSON instead of text.
///
/// Output:
/// - Process exit code: 0 on success, 1 on failure.
pub async fn handle_list(backend: &SharedBackend, json: bool) -> i32 {
    tracing::info!(json, "List catalog requested from CLI");
    let listings = match collect_listings(backend).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load catalog: {e}");
            tracing::error!(error = %e, "catalog listing failed");
            return 1;
        }
    };
    if json {
        match serde_json::to_string_pretty(&listings) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode listing: {e}");
                tracing::error!(error = %e, "listing serialization failed");
                return 1;
            }
        }
    } else {
        print!("{}", render_text(&listings));
    }
    0
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::MemoryBackend;

    #[tokio::test]
    /// What: Listings pair each country with its competitions and render both ways.
    ///
    /// Inputs:
    /// - Argentina with Liga Profesional (10), Chile with nothing.
    ///
    /// Output:
    /// - Text lists the id under the country; JSON omits image bytes.
    async fn listing_collects_and_renders() {
        let backend: SharedBackend = Arc::new(
            MemoryBackend::new(vec![
                Country {
                    id: 1,
                    name: "Argentina".into(),
                    flag_blob: b"<svg/>".to_vec(),
                },
                Country {
                    id: 2,
                    name: "Chile".into(),
                    flag_blob: Vec::new(),
                },
            ])
            .with_competitions(
                1,
                vec![Competition {
                    id: 10,
                    name: "Liga Profesional".into(),
                    logo_blob: vec![1, 2, 3],
                }],
            ),
        );
        let listings = collect_listings(&backend).await.expect("listings");
        let text = render_text(&listings);
        assert!(text.contains("Argentina (#1)"));
        assert!(text.contains("   10  Liga Profesional"));
        assert!(text.contains("Chile (#2)\n    (no competitions)"));

        let json = serde_json::to_value(&listings).expect("json");
        assert_eq!(json[0]["competitions"][0]["id"], 10);
        assert!(json[0].get("flag_blob").is_none());
    }

    #[tokio::test]
    /// What: A failing backend makes the listing fail.
    ///
    /// Inputs:
    /// - Backend whose `get_countries` fails.
    ///
    /// Output:
    /// - `handle_list` returns exit code 1.
    async fn listing_failure_exits_nonzero() {
        let backend: SharedBackend =
            Arc::new(MemoryBackend::new(Vec::new()).failing_countries("offline"));
        assert_eq!(handle_list(&backend, false).await, 1);
    }
}
