//! Install side of the workflow: the apply/remove guards and their outcomes.

use tokio::sync::mpsc;

use crate::state::{AppState, InstallOutcome, InstallRequest, Severity};

/// What: Install the selected competition's scoreboard.
///
/// Inputs:
/// - `app`: Application state.
/// - `install_tx`: Channel to the install worker.
///
/// Output:
/// - `true` when an install request was dispatched.
///
/// Details:
/// - Without a selected competition: warning toast, nothing else.
/// - While an apply is already running the call is ignored (the control is disabled);
///   while a remove is running it is refused with a warning.
/// - `is_applying` is set before the request is sent and cleared only by
///   [`InstallOutcome::ApplySettled`].
pub fn apply(app: &mut AppState, install_tx: &mpsc::UnboundedSender<InstallRequest>) -> bool {
    let Some(competition_id) = app
        .selection
        .selected_competition()
        .filter(|_| !app.selection.selected_competition_id().is_empty())
        .map(|c| c.id)
    else {
        app.toasts.warning("No scoreboard selected!");
        return false;
    };
    if app.install.is_applying {
        tracing::debug!("[Install] apply ignored, already applying");
        return false;
    }
    if app.install.is_removing {
        app.toasts.warning("Restore in progress, please wait");
        return false;
    }
    app.install.is_applying = true;
    app.toasts.info("Applying scoreboard...");
    tracing::info!(competition_id, "[Install] apply requested");
    if install_tx
        .send(InstallRequest::Apply { competition_id })
        .is_err()
    {
        tracing::error!("[Install] install worker gone");
        app.install.is_applying = false;
        app.toasts.error("Error installing scoreboard");
        return false;
    }
    true
}

/// What: Restore the game's original scoreboard.
///
/// Inputs:
/// - `app`: Application state.
/// - `install_tx`: Channel to the install worker.
///
/// Output:
/// - `true` when a remove request was dispatched.
///
/// Details:
/// - Shares the in-flight guard with [`apply`]; refused with a warning while busy.
/// - Shows a loading toast that [`handle_install_outcome`] later resolves.
pub fn remove(app: &mut AppState, install_tx: &mpsc::UnboundedSender<InstallRequest>) -> bool {
    if app.install.is_busy() {
        app.toasts.warning("Another operation is in progress");
        return false;
    }
    app.install.is_removing = true;
    let toast = app.toasts.loading("Restoring original...");
    app.install.remove_toast = Some(toast);
    tracing::info!("[Install] remove requested");
    if install_tx.send(InstallRequest::Remove).is_err() {
        tracing::error!("[Install] install worker gone");
        app.install.is_removing = false;
        app.install.remove_toast = None;
        app.toasts
            .resolve(toast, Severity::Error, "Error: install worker unavailable");
        return false;
    }
    true
}

/// What: Apply an install worker outcome to the state.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Result reported by the install worker.
///
/// Output:
/// - None.
///
/// Details:
/// - Install failures show a generic error toast; the backend text goes to the log.
/// - Remove outcomes resolve the pending loading toast with the backend's message.
pub fn handle_install_outcome(app: &mut AppState, outcome: InstallOutcome) {
    match outcome {
        InstallOutcome::Applied(Ok(())) => {
            tracing::info!("[Install] scoreboard installed");
            app.toasts.success("Scoreboard installed successfully");
        }
        InstallOutcome::Applied(Err(e)) => {
            tracing::error!(error = %e, "[Install] install failed");
            app.toasts.error("Error installing scoreboard");
        }
        InstallOutcome::ApplySettled => {
            app.install.is_applying = false;
        }
        InstallOutcome::Removed(result) => {
            app.install.is_removing = false;
            let (severity, message) = match result {
                Ok(msg) => {
                    tracing::info!(%msg, "[Install] scoreboard restored");
                    (Severity::Success, msg)
                }
                Err(e) => {
                    tracing::error!(error = %e, "[Install] remove failed");
                    (Severity::Error, format!("Error: {e}"))
                }
            };
            match app.install.remove_toast.take() {
                Some(id) => app.toasts.resolve(id, severity, message),
                None => {
                    app.toasts.push(severity, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Competition, CompetitionsReply};
    use crate::state::CatalogReply;

    /// What: State with competition 10 loaded and selected.
    fn selected_state() -> AppState {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        crate::logic::choose_country(&mut app, "1", &tx);
        let generation = app.selection.generation();
        crate::logic::handle_catalog_reply(
            &mut app,
            CatalogReply::Competitions(CompetitionsReply {
                generation,
                country_id: 1,
                result: Ok(vec![Competition {
                    id: 10,
                    name: "Liga Profesional".into(),
                    logo_blob: vec![1],
                }]),
            }),
        );
        crate::logic::choose_competition(&mut app, "10");
        app
    }

    fn last_toast(app: &AppState) -> (Severity, String) {
        let t = app.toasts.items().last().expect("toast");
        (t.severity, t.message.clone())
    }

    #[test]
    /// What: Applying without a selection only warns.
    ///
    /// Inputs:
    /// - Fresh state.
    ///
    /// Output:
    /// - No request, `is_applying` stays false, warning toast.
    fn apply_without_selection_warns() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!apply(&mut app, &tx));
        assert!(rx.try_recv().is_err());
        assert!(!app.install.is_applying);
        assert_eq!(
            last_toast(&app),
            (Severity::Warning, "No scoreboard selected!".to_string())
        );
    }

    #[test]
    /// What: Applying with a selection sets the flag synchronously and sends the id.
    ///
    /// Inputs:
    /// - Competition 10 selected.
    ///
    /// Output:
    /// - `Apply { 10 }` sent, info toast, flag set until settled.
    fn apply_sets_flag_and_sends_request() {
        let mut app = selected_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(apply(&mut app, &tx));
        assert!(app.install.is_applying);
        assert!(!app.can_apply());
        assert_eq!(
            rx.try_recv().expect("request"),
            InstallRequest::Apply { competition_id: 10 }
        );
        assert_eq!(
            last_toast(&app),
            (Severity::Info, "Applying scoreboard...".to_string())
        );

        // Second press while busy is ignored
        assert!(!apply(&mut app, &tx));
        assert!(rx.try_recv().is_err());

        handle_install_outcome(&mut app, InstallOutcome::Applied(Ok(())));
        assert!(app.install.is_applying);
        assert_eq!(
            last_toast(&app),
            (Severity::Success, "Scoreboard installed successfully".to_string())
        );
        handle_install_outcome(&mut app, InstallOutcome::ApplySettled);
        assert!(!app.install.is_applying);
        assert!(app.can_apply());
    }

    #[test]
    /// What: A failed install shows the generic error and still settles.
    ///
    /// Inputs:
    /// - Apply followed by `Applied(Err)` and `ApplySettled`.
    ///
    /// Output:
    /// - Error toast; flag cleared after settle.
    fn apply_failure_reports_and_settles() {
        let mut app = selected_state();
        let (tx, _rx) = mpsc::unbounded_channel();
        apply(&mut app, &tx);
        handle_install_outcome(&mut app, InstallOutcome::Applied(Err("disk full".into())));
        assert_eq!(
            last_toast(&app),
            (Severity::Error, "Error installing scoreboard".to_string())
        );
        handle_install_outcome(&mut app, InstallOutcome::ApplySettled);
        assert!(!app.install.is_applying);
    }

    #[test]
    /// What: Remove resolves its loading toast with the backend message.
    ///
    /// Inputs:
    /// - Remove, then `Removed(Ok)`; remove again, then `Removed(Err)`.
    ///
    /// Output:
    /// - Same toast becomes success, then a new one becomes `Error: ...`.
    fn remove_resolves_loading_toast() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(remove(&mut app, &tx));
        assert_eq!(rx.try_recv().expect("request"), InstallRequest::Remove);
        let id = app.install.remove_toast.expect("loading toast");
        assert_eq!(app.toasts.get(id).map(|t| t.severity), Some(Severity::Loading));

        handle_install_outcome(
            &mut app,
            InstallOutcome::Removed(Ok("Original scoreboard restored".into())),
        );
        assert!(!app.install.is_removing);
        let t = app.toasts.get(id).expect("resolved toast");
        assert_eq!(t.severity, Severity::Success);
        assert_eq!(t.message, "Original scoreboard restored");

        assert!(remove(&mut app, &tx));
        handle_install_outcome(
            &mut app,
            InstallOutcome::Removed(Err("No custom scoreboard is installed".into())),
        );
        assert_eq!(
            last_toast(&app),
            (
                Severity::Error,
                "Error: No custom scoreboard is installed".to_string()
            )
        );
    }

    #[test]
    /// What: Apply and remove share one in-flight guard.
    ///
    /// Inputs:
    /// - Remove while applying; apply while removing.
    ///
    /// Output:
    /// - Both refused with warnings; no extra requests.
    fn apply_and_remove_share_guard() {
        let mut app = selected_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(apply(&mut app, &tx));
        rx.try_recv().expect("apply request");
        assert!(!remove(&mut app, &tx));
        assert_eq!(last_toast(&app).0, Severity::Warning);
        handle_install_outcome(&mut app, InstallOutcome::ApplySettled);

        assert!(remove(&mut app, &tx));
        rx.try_recv().expect("remove request");
        assert!(!apply(&mut app, &tx));
        assert_eq!(
            last_toast(&app),
            (Severity::Warning, "Restore in progress, please wait".to_string())
        );
        assert!(rx.try_recv().is_err());
    }
}
