// SPDX-License-Identifier: MPL-2.0
//! UI components: one module per screen plus shared building blocks
//! (design tokens, theming, navbar, toast notifications).

pub mod dashboard;
pub mod design_tokens;
pub mod exercise_browser;
pub mod intake;
pub mod navbar;
pub mod notifications;
pub mod plans;
pub mod theming;
