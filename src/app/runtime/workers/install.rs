use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::backend::SharedBackend;
use crate::state::{InstallOutcome, InstallRequest};

/// What: Spawn the background worker running installs and removes.
///
/// Inputs:
/// - `backend`: Target of the install/remove calls.
/// - `req_rx`: Requests issued by the event loop.
/// - `outcome_tx`: Outcomes back to the event loop.
/// - `settle`: Delay between an apply finishing and [`InstallOutcome::ApplySettled`].
///
/// Details:
/// - Requests are served one at a time in arrival order.
/// - Every apply is followed by `ApplySettled` after `settle`, on success and on failure.
pub fn spawn_install_worker(
    backend: SharedBackend,
    mut req_rx: mpsc::UnboundedReceiver<InstallRequest>,
    outcome_tx: mpsc::UnboundedSender<InstallOutcome>,
    settle: Duration,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            match req {
                InstallRequest::Apply { competition_id } => {
                    tracing::debug!(competition_id, "[InstallWorker] installing");
                    let result = backend.install_competition(competition_id).await;
                    let _ = outcome_tx.send(InstallOutcome::Applied(result));
                    sleep(settle).await;
                    let _ = outcome_tx.send(InstallOutcome::ApplySettled);
                }
                InstallRequest::Remove => {
                    tracing::debug!("[InstallWorker] removing");
                    let result = backend.remove_current_scoreboard().await;
                    let _ = outcome_tx.send(InstallOutcome::Removed(result));
                }
            }
        }
        tracing::debug!("[InstallWorker] request channel closed, worker exiting");
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::MemoryBackend;

    #[tokio::test]
    /// What: Apply outcomes are followed by the settle notification.
    ///
    /// Inputs:
    /// - Failing install backend, 20 ms settle.
    ///
    /// Output:
    /// - `Applied(Err)` then `ApplySettled`.
    async fn apply_reports_then_settles() {
        let backend = Arc::new(MemoryBackend::new(Vec::new()).failing_install("locked"));
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel();
        spawn_install_worker(backend.clone(), req_rx, out_tx, Duration::from_millis(20));
        req_tx
            .send(InstallRequest::Apply { competition_id: 10 })
            .expect("send");
        assert_eq!(
            out_rx.recv().await,
            Some(InstallOutcome::Applied(Err("locked".to_string())))
        );
        assert_eq!(out_rx.recv().await, Some(InstallOutcome::ApplySettled));
        assert_eq!(backend.installs(), vec![10]);
    }
}
