// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct and `ToastKind` enum used by the
//! notification system. A toast is a transient, best-effort UI affordance:
//! it carries an opaque caller-supplied message and a visual kind, and it
//! expires a fixed interval after creation.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays on screen before it is removed automatically.
/// The interval is the same for every kind.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Unique identifier for a toast.
///
/// Ids come from a process-wide monotonic counter, so they are unique for
/// the lifetime of the process even under rapid successive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual category of a toast.
///
/// Kind selects the accent color and glyph only; it has no behavioral
/// effect. In particular, errors auto-dismiss like everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
            ToastKind::Info => palette::INFO_500,
            ToastKind::Warning => palette::WARNING_500,
        }
    }

    /// Returns the glyph shown before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2713}", // ✓
            ToastKind::Error => "\u{2715}",   // ✕
            ToastKind::Info => "\u{2139}",    // ℹ
            ToastKind::Warning => "\u{26A0}", // ⚠
        }
    }
}

/// A single notification shown to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast.
    id: ToastId,
    /// Visual category.
    kind: ToastKind,
    /// Display text, taken verbatim from the caller. Never validated:
    /// an empty message is accepted and rendered as-is.
    message: String,
    /// When this toast was created.
    created_at: Instant,
}

impl Toast {
    /// Creates a new toast stamped with the given creation instant.
    pub(super) fn new(message: impl Into<String>, kind: ToastKind, created_at: Instant) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            message: message.into(),
            created_at,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the visual kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this toast has outlived [`AUTO_DISMISS_AFTER`] at
    /// the given instant. Taking `now` as a parameter keeps expiry
    /// decisions deterministic under test.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= AUTO_DISMISS_AFTER
    }
}
