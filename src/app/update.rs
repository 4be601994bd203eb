// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Screen components return events from their pure `update` functions;
//! the handlers here translate those events into side effects: backend
//! calls wrapped in `Task::perform`, screen switches, and toasts.

use super::{Message, Screen};
use crate::api::ApiClient;
use crate::ui::notifications;
use crate::ui::{dashboard, exercise_browser, intake, navbar, plans};
use iced::Task;

/// Mutable borrows of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub dashboard: &'a mut dashboard::State,
    pub intake: &'a mut intake::State,
    pub plans: &'a mut plans::State,
    pub exercises: &'a mut exercise_browser::State,
    pub notifications: &'a mut notifications::Manager,
    pub api: &'a ApiClient,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::Navigate(target) => {
            *ctx.screen = target;
        }
    }
    Task::none()
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match dashboard::update(ctx.dashboard, message) {
        dashboard::Event::Refresh => fetch_clients(ctx.api),
        dashboard::Event::GeneratePlan(client_id) => {
            // Jump to the plans screen with the client preselected so the
            // coach sees the result where plan work happens.
            if let Some(client) = ctx
                .dashboard
                .clients()
                .iter()
                .find(|client| client.id == client_id)
            {
                ctx.plans.select_client(plans::ClientChoice::from(client));
            }
            *ctx.screen = Screen::Plans;
            ctx.plans.set_generating(true);
            generate_plan(ctx.api, client_id, true)
        }
    }
}

pub fn handle_intake_message(
    ctx: &mut UpdateContext<'_>,
    message: intake::Message,
) -> Task<Message> {
    match intake::update(ctx.intake, message) {
        intake::Event::None => Task::none(),
        intake::Event::Invalid(reason) => {
            ctx.notifications.warning(reason);
            Task::none()
        }
        intake::Event::Submit(payload) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.create_client(&payload).await },
                Message::ClientCreated,
            )
        }
    }
}

pub fn handle_plans_message(
    ctx: &mut UpdateContext<'_>,
    message: plans::Message,
) -> Task<Message> {
    match plans::update(ctx.plans, message) {
        plans::Event::None => Task::none(),
        plans::Event::NoClientSelected => {
            ctx.notifications.info("Select a client first");
            Task::none()
        }
        plans::Event::Generate { client_id, save } => generate_plan(ctx.api, client_id, save),
    }
}

pub fn handle_exercises_message(
    ctx: &mut UpdateContext<'_>,
    message: exercise_browser::Message,
) -> Task<Message> {
    exercise_browser::update(ctx.exercises, message);
    Task::none()
}

/// Fetches the coach profile in the background.
pub fn fetch_profile(api: &ApiClient) -> Task<Message> {
    let api = api.clone();
    Task::perform(async move { api.me().await }, Message::ProfileFetched)
}

/// Fetches the client roster in the background.
pub fn fetch_clients(api: &ApiClient) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move { api.list_clients().await },
        Message::ClientsFetched,
    )
}

/// Fetches the exercise library in the background.
pub fn fetch_exercises(api: &ApiClient) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move { api.list_exercises().await },
        Message::ExercisesFetched,
    )
}

/// Generates a plan for a client in the background.
pub fn generate_plan(api: &ApiClient, client_id: String, save: bool) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move { api.generate_plan(&client_id, save).await },
        Message::PlanGenerated,
    )
}
