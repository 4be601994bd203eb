// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the ordered set of active toasts. Exactly one manager
//! exists per running application: it is a field on the root `App` state
//! and is handed to update handlers by mutable reference, so every
//! consumer goes through the same instance by construction.
//!
//! Expiry uses idempotent removal rather than per-toast timers: the
//! application's tick subscription calls [`Manager::tick`] while any toast
//! is alive, and a toast dismissed early simply isn't there when its
//! deadline would have fired.

use super::notification::{Toast, ToastId, ToastKind};
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Tick for checking auto-dismiss deadlines.
    Tick,
}

/// Manages the active toasts, oldest first.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active toasts in insertion order (insertion order = display order).
    active: Vec<Toast>,
}

impl Manager {
    /// Creates a new empty toast manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a toast and returns its fresh ID immediately.
    ///
    /// Never fails: the message is accepted verbatim (even empty) and the
    /// toast is appended to the end of the active sequence. It will be
    /// removed automatically once [`super::AUTO_DISMISS_AFTER`] elapses,
    /// or earlier via [`Manager::dismiss`].
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.push_at(message, kind, Instant::now())
    }

    /// Enqueues a toast stamped with an explicit creation instant.
    ///
    /// `push` delegates here with `Instant::now()`; tests pass a fixed
    /// instant to control expiry.
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: Instant,
    ) -> ToastId {
        let toast = Toast::new(message, kind, now);
        let id = toast.id();
        self.active.push(toast);
        id
    }

    /// Enqueues a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Success)
    }

    /// Enqueues an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Error)
    }

    /// Enqueues an info toast.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Info)
    }

    /// Enqueues a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Warning)
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed. Dismissing an
    /// unknown or already-removed ID is a no-op, never an error, which is
    /// what makes the delayed auto-removal safe without timer cancellation.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|toast| toast.id() != id);
        self.active.len() != before
    }

    /// Removes every toast whose auto-dismiss deadline has passed at `now`.
    ///
    /// Called from the periodic tick subscription, which only runs while
    /// toasts exist.
    pub fn tick(&mut self, now: Instant) {
        self.active.retain(|toast| !toast.is_expired(now));
    }

    /// Handles a toast message from the UI.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick(now);
            }
        }
    }

    /// Returns the active toasts in display order (oldest first).
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    /// Read-only snapshot of the active sequence.
    #[must_use]
    pub fn active_toasts(&self) -> &[Toast] {
        &self.active
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no toast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether any toast is active (drives the tick subscription).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.active.is_empty()
    }

    /// Removes all toasts.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::AUTO_DISMISS_AFTER;
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_toasts());
    }

    #[test]
    fn push_returns_id_and_appends_in_call_order() {
        let mut manager = Manager::new();
        let first = manager.push("first", ToastKind::Success);
        let second = manager.push("second", ToastKind::Error);
        let third = manager.info("third");

        let order: Vec<ToastId> = manager.active().map(Toast::id).collect();
        assert_eq!(order, vec![first, second, third]);

        let messages: Vec<&str> = manager.active().map(Toast::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn dismiss_removes_exactly_the_given_toast() {
        let mut manager = Manager::new();
        let a = manager.info("a");
        let b = manager.info("b");
        let c = manager.info("c");

        assert!(manager.dismiss(b));

        let order: Vec<ToastId> = manager.active().map(Toast::id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = Manager::new();
        manager.info("keep me");

        let mut other = Manager::new();
        let foreign = other.info("elsewhere");

        assert!(!manager.dismiss(foreign));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.success("saved");

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn tick_removes_only_expired_toasts() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let old = manager.push_at("old", ToastKind::Info, start);
        let young = manager.push_at(
            "young",
            ToastKind::Info,
            start + Duration::from_secs(3),
        );

        manager.tick(start + AUTO_DISMISS_AFTER);

        let order: Vec<ToastId> = manager.active().map(Toast::id).collect();
        assert_eq!(order, vec![young]);
        let _ = old;
    }

    #[test]
    fn tick_after_manual_dismiss_is_a_noop() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.push_at("dismiss me early", ToastKind::Warning, start);

        assert!(manager.dismiss(id));
        // The deadline for the dismissed toast later elapses; nothing breaks.
        manager.tick(start + AUTO_DISMISS_AFTER);
        assert!(manager.is_empty());
    }

    #[test]
    fn error_toasts_expire_like_any_other_kind() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.push_at("boom", ToastKind::Error, start);

        manager.tick(start + AUTO_DISMISS_AFTER - Duration::from_millis(1));
        assert_eq!(manager.len(), 1);

        manager.tick(start + AUTO_DISMISS_AFTER);
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let a = manager.push_at("a", ToastKind::Info, start);
        manager.push_at("b", ToastKind::Info, start + Duration::from_secs(2));

        manager.handle_message(&Message::Dismiss(a), start);
        assert_eq!(manager.len(), 1);

        manager.handle_message(&Message::Tick, start + AUTO_DISMISS_AFTER + Duration::from_secs(2));
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.info(format!("toast-{i}"));
        }
        manager.clear();
        assert!(manager.is_empty());
    }
}
