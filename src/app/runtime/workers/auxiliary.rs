use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawns tick worker that sends tick events every 200ms.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Ticks drive toast expiry and the spinner; the worker stops once the loop is gone.
pub fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the thread reading terminal input.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Channel for terminal events.
/// - `cancelled`: Set by the runtime on exit.
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "[Runtime] terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "[Runtime] terminal poll failed"),
            }
        }
    });
}
