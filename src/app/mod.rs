// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, the backend client, and
//! the toast notification manager, and translates messages into side
//! effects like backend calls. Policy decisions (which screen a result
//! lands on, what gets a toast) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::models::CoachProfile;
use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{dashboard, exercise_browser, intake, plans};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state bridging the screens, the backend client,
/// and persisted preferences.
pub struct App {
    screen: Screen,
    coach: Option<CoachProfile>,
    dashboard: dashboard::State,
    intake: intake::State,
    plans: plans::State,
    exercises: exercise_browser::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    api: ApiClient,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("clients", &self.dashboard.clients().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            coach: None,
            dashboard: dashboard::State::new(),
            intake: intake::State::new(),
            plans: plans::State::new(),
            exercises: exercise_browser::State::new(),
            notifications: notifications::Manager::new(),
            api: ApiClient::new(DEFAULT_BASE_URL, None),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from config and flags and kicks off
    /// the initial backend fetches.
    ///
    /// Precedence for backend settings: CLI flag, then config file, then
    /// the built-in default.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let base_url = flags
            .api_base
            .or(config.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = flags.token.or(config.api.token);

        let mut app = App {
            api: ApiClient::new(base_url, token),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.warning(warning);
        }

        app.dashboard.set_loading(true);
        app.exercises.set_loading(true);

        let task = Task::batch([
            update::fetch_profile(&app.api),
            update::fetch_clients(&app.api),
            update::fetch_exercises(&app.api),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        match &self.coach {
            Some(coach) if !coach.first_name.is_empty() => {
                format!("{} - Dig Deep Coach", coach.first_name)
            }
            _ => "Dig Deep Coach".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_toasts())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            dashboard: &mut self.dashboard,
            intake: &mut self.intake,
            plans: &mut self.plans,
            exercises: &mut self.exercises,
            notifications: &mut self.notifications,
            api: &self.api,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::Intake(intake_message) => {
                update::handle_intake_message(&mut ctx, intake_message)
            }
            Message::Plans(plans_message) => update::handle_plans_message(&mut ctx, plans_message),
            Message::Exercises(exercises_message) => {
                update::handle_exercises_message(&mut ctx, exercises_message)
            }
            Message::Toast(toast_message) => {
                self.notifications
                    .handle_message(&toast_message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::ProfileFetched(result) => {
                match result {
                    Ok(profile) => self.coach = Some(profile),
                    Err(err) => {
                        // Without a token the profile endpoint is expected
                        // to reject us; stay quiet in that case.
                        if self.api.has_token() {
                            self.notifications.warning(err.user_message());
                        }
                    }
                }
                Task::none()
            }
            Message::ClientsFetched(result) => {
                match result {
                    Ok(clients) => self.dashboard.set_clients(clients),
                    Err(err) => {
                        self.dashboard.set_loading(false);
                        self.notifications.error(err.user_message());
                    }
                }
                Task::none()
            }
            Message::ClientCreated(result) => {
                match result {
                    Ok(client) => {
                        self.notifications
                            .success(format!("Client {} created", client.display_name()));
                        self.intake.reset();
                        self.dashboard.add_client(client);
                    }
                    Err(err) => {
                        self.intake.set_submitting(false);
                        self.notifications.error(err.user_message());
                    }
                }
                Task::none()
            }
            Message::PlanGenerated(result) => {
                match result {
                    Ok(plan) => {
                        self.notifications
                            .success(format!("Plan generated for {}", plan.client));
                        self.plans.set_plan(plan);
                    }
                    Err(err) => {
                        self.plans.set_generating(false);
                        self.notifications.error(err.user_message());
                    }
                }
                Task::none()
            }
            Message::ExercisesFetched(result) => {
                match result {
                    Ok(exercises) => self.exercises.set_catalog(exercises),
                    Err(err) => {
                        // The built-in catalog keeps the browser usable.
                        self.exercises.set_loading(false);
                        self.notifications.error(err.user_message());
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            dashboard: &self.dashboard,
            intake: &self.intake,
            plans: &self.plans,
            exercises: &self.exercises,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Client, WorkoutPlan};
    use crate::error::Error;
    use crate::ui::navbar;
    use crate::ui::notifications::{ToastKind, AUTO_DISMISS_AFTER};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_client(id: &str, first_name: &str) -> Client {
        Client {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Tester".into(),
            preferred_name: String::new(),
            email: String::new(),
            age_group: "25-34".into(),
            primary_location: "Home".into(),
            days_per_week: 3,
            goals: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn default_app_starts_on_dashboard() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.dashboard.clients().is_empty());
        assert_eq!(app.api.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn navbar_navigation_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            Screen::Exercises,
        )));
        assert_eq!(app.screen, Screen::Exercises);
    }

    #[test]
    fn clients_fetched_populates_dashboard() {
        let mut app = App::default();
        app.dashboard.set_loading(true);

        let _ = app.update(Message::ClientsFetched(Ok(vec![
            sample_client("c-1", "Ada"),
            sample_client("c-2", "Sam"),
        ])));

        assert_eq!(app.dashboard.clients().len(), 2);
    }

    #[test]
    fn clients_fetch_error_shows_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ClientsFetched(Err(Error::Http("refused".into()))));
        assert!(app.notifications.has_toasts());
    }

    #[test]
    fn client_created_resets_intake_and_extends_roster() {
        let mut app = App::default();
        let _ = app.update(Message::Intake(intake::Message::FirstNameChanged(
            "Ada".into(),
        )));

        let _ = app.update(Message::ClientCreated(Ok(sample_client("c-1", "Ada"))));

        assert_eq!(app.dashboard.clients().len(), 1);
        assert!(app.intake.form().first_name.is_empty());
        assert!(app.notifications.has_toasts());
    }

    #[test]
    fn plan_generated_lands_on_plans_state() {
        let mut app = App::default();
        app.plans.set_generating(true);

        let _ = app.update(Message::PlanGenerated(Ok(WorkoutPlan {
            client: "Ada".into(),
            plan: BTreeMap::new(),
        })));

        assert!(app.notifications.has_toasts());
    }

    #[test]
    fn invalid_intake_submit_warns_without_leaving_screen() {
        let mut app = App::default();
        app.screen = Screen::Intake;

        let _ = app.update(Message::Intake(intake::Message::Submit));

        assert_eq!(app.screen, Screen::Intake);
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn dashboard_generate_plan_preselects_client_and_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::ClientsFetched(Ok(vec![sample_client(
            "c-7", "Ada",
        )])));

        let _ = app.update(Message::Dashboard(dashboard::Message::GeneratePlan(
            "c-7".into(),
        )));

        assert_eq!(app.screen, Screen::Plans);
        assert_eq!(app.plans.selected().map(|c| c.id.as_str()), Some("c-7"));
    }

    #[test]
    fn tick_dismisses_expired_toasts() {
        let mut app = App::default();
        let start = Instant::now();
        app.notifications.push_at("expired", ToastKind::Info, start);

        let _ = app.update(Message::Tick(start + AUTO_DISMISS_AFTER));

        assert!(!app.notifications.has_toasts());
    }

    #[test]
    fn title_includes_coach_name_when_known() {
        let mut app = App::default();
        assert_eq!(app.title(), "Dig Deep Coach");

        let _ = app.update(Message::ProfileFetched(Ok(CoachProfile {
            id: Some("u-1".into()),
            email: "coach@example.com".into(),
            first_name: "Riley".into(),
            last_name: "Chen".into(),
        })));

        assert_eq!(app.title(), "Riley - Dig Deep Coach");
    }
}
