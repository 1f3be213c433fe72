use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers::{spawn_catalog_worker, spawn_install_worker};
use crate::backend::SharedBackend;
use crate::state::{CatalogReply, CatalogRequest, InstallOutcome, InstallRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fetch requests to the catalog worker.
    pub catalog_tx: mpsc::UnboundedSender<CatalogRequest>,
    /// Fetch results from the catalog worker.
    pub catalog_rx: mpsc::UnboundedReceiver<CatalogReply>,
    /// Apply/remove requests to the install worker.
    pub install_tx: mpsc::UnboundedSender<InstallRequest>,
    /// Outcomes from the install worker.
    pub install_rx: mpsc::UnboundedReceiver<InstallOutcome>,
    /// Tick sender handed to the tick worker.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Ticks consumed by the loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all runtime channels and spawn the backend workers.
    ///
    /// Inputs:
    /// - `backend`: Data source for the catalog and install workers.
    /// - `apply_settle`: Delay between an apply finishing and the control re-enabling.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new(backend: &SharedBackend, apply_settle: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (catalog_tx, catalog_req_rx) = mpsc::unbounded_channel::<CatalogRequest>();
        let (catalog_reply_tx, catalog_rx) = mpsc::unbounded_channel::<CatalogReply>();
        let (install_tx, install_req_rx) = mpsc::unbounded_channel::<InstallRequest>();
        let (install_out_tx, install_rx) = mpsc::unbounded_channel::<InstallOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_catalog_worker(Arc::clone(backend), catalog_req_rx, catalog_reply_tx);
        spawn_install_worker(
            Arc::clone(backend),
            install_req_rx,
            install_out_tx,
            apply_settle,
        );

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            catalog_tx,
            catalog_rx,
            install_tx,
            install_rx,
            tick_tx,
            tick_rx,
        }
    }
}
