use std::sync::Arc;

use tokio::sync::mpsc;

use crate::backend::SharedBackend;
use crate::state::{CatalogReply, CatalogRequest, CompetitionsReply};

/// What: Spawn the background worker serving catalog requests.
///
/// Inputs:
/// - `backend`: Data source shared with the install worker.
/// - `req_rx`: Requests issued by the event loop.
/// - `reply_tx`: Replies back to the event loop.
///
/// Details:
/// - Every request runs in its own task, so replies may arrive in any order;
///   competition replies echo the request's generation for the loop to filter.
/// - Nothing is cancelled; superseded replies are simply discarded on arrival.
/// - The worker exits when the request channel closes.
pub fn spawn_catalog_worker(
    backend: SharedBackend,
    mut req_rx: mpsc::UnboundedReceiver<CatalogRequest>,
    reply_tx: mpsc::UnboundedSender<CatalogReply>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let backend = Arc::clone(&backend);
            let tx = reply_tx.clone();
            tokio::spawn(async move {
                let reply = match req {
                    CatalogRequest::Countries => {
                        tracing::debug!("[Catalog] fetching countries");
                        CatalogReply::Countries(backend.get_countries().await)
                    }
                    CatalogRequest::Competitions(r) => {
                        tracing::debug!(
                            country_id = r.country_id,
                            generation = r.generation,
                            "[Catalog] fetching competitions"
                        );
                        CatalogReply::Competitions(CompetitionsReply {
                            generation: r.generation,
                            country_id: r.country_id,
                            result: backend.get_competitions_by_country(r.country_id).await,
                        })
                    }
                };
                let _ = tx.send(reply);
            });
        }
        tracing::debug!("[Catalog] request channel closed, worker exiting");
    });
}
