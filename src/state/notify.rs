//! Transient, non-blocking notifications ("toasts").

use std::time::{Duration, Instant};

/// Maximum number of toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Severity of a toast, which drives its color and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// An operation completed.
    Success,
    /// A guard refused the action; nothing was attempted.
    Warning,
    /// A backend request failed.
    Error,
    /// Pending promise-style toast; resolved later via [`Toasts::resolve`].
    Loading,
}

/// A single toast.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Identifier used to resolve loading toasts.
    pub id: u64,
    /// Current severity.
    pub severity: Severity,
    /// Text shown to the user.
    pub message: String,
    /// When the toast disappears; `None` while loading.
    pub expires_at: Option<Instant>,
}

/// Ordered toast queue, oldest first.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl Toasts {
    /// Create a queue whose finished toasts live for `lifetime`.
    #[must_use]
    pub const fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            lifetime,
        }
    }

    /// Change how long finished toasts stay visible.
    pub const fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime = lifetime;
    }

    /// Toasts currently queued, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Look up a toast by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    /// What: Queue a toast.
    ///
    /// Inputs:
    /// - `severity`: Toast kind; `Loading` toasts never expire until resolved.
    /// - `message`: Text to display.
    ///
    /// Output:
    /// - Id of the new toast.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let expires_at = match severity {
            Severity::Loading => None,
            _ => Some(Instant::now() + self.lifetime),
        };
        self.items.push(Toast {
            id,
            severity,
            message: message.into(),
            expires_at,
        });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Queue an info toast.
    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Info, message)
    }

    /// Queue a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Success, message)
    }

    /// Queue a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Warning, message)
    }

    /// Queue an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Error, message)
    }

    /// Queue a loading toast that stays until resolved.
    pub fn loading(&mut self, message: impl Into<String>) -> u64 {
        self.push(Severity::Loading, message)
    }

    /// What: Transition a toast (typically a loading one) to its final state.
    ///
    /// Inputs:
    /// - `id`: Toast to update.
    /// - `severity`, `message`: Final severity and text.
    ///
    /// Output:
    /// - None.
    ///
    /// Details:
    /// - If the toast was already dropped from the queue, a fresh toast is pushed so the
    ///   outcome is never lost.
    pub fn resolve(&mut self, id: u64, severity: Severity, message: impl Into<String>) {
        let expires_at = Some(Instant::now() + self.lifetime);
        let message = message.into();
        if let Some(t) = self.items.iter_mut().find(|t| t.id == id) {
            t.severity = severity;
            t.message = message;
            t.expires_at = expires_at;
        } else {
            self.push(severity, message);
        }
    }

    /// Drop every toast whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|t| t.expires_at.is_none_or(|deadline| deadline > now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Loading toasts survive expiry until resolved.
    ///
    /// Inputs:
    /// - One loading and one info toast with zero lifetime.
    ///
    /// Output:
    /// - Only the loading toast remains; after resolve it expires too.
    fn loading_toast_persists_until_resolved() {
        let mut toasts = Toasts::new(Duration::ZERO);
        let pending = toasts.loading("Restoring original...");
        toasts.info("Applying scoreboard...");
        toasts.expire(Instant::now());
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].severity, Severity::Loading);

        toasts.resolve(pending, Severity::Success, "Original scoreboard restored");
        let t = toasts.get(pending).expect("resolved toast");
        assert_eq!(t.severity, Severity::Success);
        assert_eq!(t.message, "Original scoreboard restored");
        toasts.expire(Instant::now());
        assert!(toasts.items().is_empty());
    }

    #[test]
    /// What: The queue never grows beyond the visible cap.
    ///
    /// Inputs:
    /// - Seven warning toasts.
    ///
    /// Output:
    /// - Five toasts remain, the newest ones.
    fn queue_is_capped() {
        let mut toasts = Toasts::default();
        for i in 0..7 {
            toasts.warning(format!("w{i}"));
        }
        assert_eq!(toasts.items().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(toasts.items()[0].message, "w2");
    }

    #[test]
    /// What: Resolving a toast that was already evicted still surfaces the outcome.
    ///
    /// Inputs:
    /// - Unknown toast id.
    ///
    /// Output:
    /// - A new toast with the final message.
    fn resolve_unknown_id_pushes_new_toast() {
        let mut toasts = Toasts::default();
        toasts.resolve(42, Severity::Error, "Error: disk full");
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].severity, Severity::Error);
    }
}
