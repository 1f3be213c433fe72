//! Catalog side of the workflow: issuing fetches and applying their replies.

use tokio::sync::mpsc;

use crate::state::{AppState, CatalogReply, CatalogRequest, CompetitionsReply};

/// What: Ask the catalog worker for the country list.
///
/// Inputs:
/// - `app`: Application state; marks countries as loading.
/// - `catalog_tx`: Channel to the catalog worker.
pub fn request_countries(app: &mut AppState, catalog_tx: &mpsc::UnboundedSender<CatalogRequest>) {
    app.countries_loading = true;
    if catalog_tx.send(CatalogRequest::Countries).is_err() {
        tracing::warn!("[Gateway] catalog worker gone, countries not requested");
        app.countries_loading = false;
    }
}

/// What: Commit a country selection and fetch its competitions.
///
/// Inputs:
/// - `app`: Application state.
/// - `country_id_text`: Selector value; empty clears the selection.
/// - `catalog_tx`: Channel to the catalog worker.
///
/// Output:
/// - None; competitions and the competition selection are cleared immediately.
///
/// Details:
/// - Logos of the previous list are released before it is dropped.
/// - A fetch is dispatched only for a parseable, non-zero id.
pub fn choose_country(
    app: &mut AppState,
    country_id_text: &str,
    catalog_tx: &mpsc::UnboundedSender<CatalogRequest>,
) {
    let released = app.images.release_logos();
    let request = app.selection.set_country(country_id_text);
    app.competition_list.select(None);
    tracing::debug!(
        country = country_id_text,
        generation = app.selection.generation(),
        released,
        "[Gateway] country selected"
    );
    app.competitions_loading = false;
    if let Some(req) = request {
        if catalog_tx.send(CatalogRequest::Competitions(req)).is_ok() {
            app.competitions_loading = true;
        } else {
            tracing::warn!(
                country_id = req.country_id,
                "[Gateway] catalog worker gone, competitions not requested"
            );
        }
    }
}

/// What: Commit a competition selection.
///
/// Inputs:
/// - `app`: Application state.
/// - `competition_id_text`: Selector value.
///
/// Output:
/// - None; the detail is the matching competition or none for an unknown id.
pub fn choose_competition(app: &mut AppState, competition_id_text: &str) {
    app.selection.set_competition(competition_id_text);
    tracing::debug!(
        competition = competition_id_text,
        found = app.selection.selected_competition().is_some(),
        "[Gateway] competition selected"
    );
}

fn handle_competitions(app: &mut AppState, reply: CompetitionsReply) {
    if reply.generation != app.selection.generation() {
        tracing::debug!(
            country_id = reply.country_id,
            generation = reply.generation,
            current = app.selection.generation(),
            "[Gateway] dropping stale competitions reply"
        );
        return;
    }
    app.competitions_loading = false;
    match reply.result {
        Ok(list) => {
            app.images.release_logos();
            let count = list.len();
            if app.selection.apply_competitions(reply.generation, list) {
                app.competition_list
                    .select(if count == 0 { None } else { Some(0) });
                tracing::info!(country_id = reply.country_id, count, "[Gateway] competitions loaded");
            }
        }
        Err(e) => {
            tracing::error!(
                country_id = reply.country_id,
                error = %e,
                "[Gateway] failed to load competitions"
            );
        }
    }
}

/// What: Apply a catalog worker reply to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `reply`: Countries or competitions result.
///
/// Output:
/// - None.
///
/// Details:
/// - Failures are logged and leave the current list untouched; there is no retry.
/// - Competition replies from an older selection generation are discarded.
pub fn handle_catalog_reply(app: &mut AppState, reply: CatalogReply) {
    match reply {
        CatalogReply::Countries(Ok(list)) => {
            app.countries_loading = false;
            app.images.release_flags();
            let count = list.len();
            app.selection.apply_countries(list);
            let cursor = app.country_list.selected().filter(|i| *i < count);
            app.country_list
                .select(cursor.or(if count == 0 { None } else { Some(0) }));
            tracing::info!(count, "[Gateway] countries loaded");
        }
        CatalogReply::Countries(Err(e)) => {
            app.countries_loading = false;
            tracing::error!(error = %e, "[Gateway] failed to load countries");
        }
        CatalogReply::Competitions(reply) => handle_competitions(app, reply),
    }
}
