// SPDX-License-Identifier: MPL-2.0
//! `dig_deep_coach` is a desktop console for the Dig Deep Fitness coaching
//! platform, built with the Iced GUI framework.
//!
//! It lets a coach review their client roster, take in new clients,
//! generate workout plans, and browse the exercise library, with toast
//! notifications for feedback on every backend interaction.

#![doc(html_root_url = "https://docs.rs/dig_deep_coach/0.1.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod library;
pub mod ui;
