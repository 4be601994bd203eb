// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::models::{Client, CoachProfile, WorkoutPlan};
use crate::error::Error;
use crate::library::Exercise;
use crate::ui::notifications::ToastMessage;
use crate::ui::{dashboard, exercise_browser, intake, navbar, plans};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The component variants
/// forward screen-local messages; the `*Fetched`/`*Created`/`*Generated`
/// variants carry results of async backend calls back into the update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Dashboard(dashboard::Message),
    Intake(intake::Message),
    Plans(plans::Message),
    Exercises(exercise_browser::Message),
    Toast(ToastMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    ProfileFetched(Result<CoachProfile, Error>),
    ClientsFetched(Result<Vec<Client>, Error>),
    ClientCreated(Result<Client, Error>),
    PlanGenerated(Result<WorkoutPlan, Error>),
    ExercisesFetched(Result<Vec<Exercise>, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Backend base URL override. Takes precedence over the config file.
    pub api_base: Option<String>,
    /// Bearer token override. Takes precedence over the config file.
    pub token: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over the `DIG_DEEP_COACH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
