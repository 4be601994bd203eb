// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive, transient messages that inform the coach about the
//! outcome of actions (client saved, plan generated, request failed)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Toast` struct, `ToastId`, and `ToastKind`
//! - [`manager`] - `Manager` owning the active set and its lifecycle
//! - [`toast`] - widget rendering individual cards and the overlay
//!
//! # Behavior
//!
//! - Every toast auto-dismisses after a fixed 5 seconds, regardless of kind
//! - Kind (success / error / info / warning) only affects styling
//! - Display order is insertion order, oldest first
//! - Dismissal is idempotent; dismissing a gone toast is a no-op
//! - Position: bottom-right corner

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as ToastMessage};
pub use notification::{Toast, ToastId, ToastKind, AUTO_DISMISS_AFTER};
