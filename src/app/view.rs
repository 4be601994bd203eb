// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar and the active screen, then layers the toast
//! overlay on top so notifications are visible from every screen.

use super::{Message, Screen};
use crate::ui::notifications::{self, toast};
use crate::ui::{dashboard, exercise_browser, intake, navbar, plans};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub dashboard: &'a dashboard::State,
    pub intake: &'a intake::State,
    pub plans: &'a plans::State,
    pub exercises: &'a exercise_browser::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => dashboard::view(ctx.dashboard).map(Message::Dashboard),
        Screen::Intake => intake::view(ctx.intake).map(Message::Intake),
        Screen::Plans => plans::view(ctx.plans, ctx.dashboard.clients()).map(Message::Plans),
        Screen::Exercises => exercise_browser::view(ctx.exercises).map(Message::Exercises),
    };

    let page = Column::new()
        .push(navbar::view(ctx.screen).map(Message::Navbar))
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let overlay = toast::view_overlay(ctx.notifications).map(Message::Toast);

    Stack::with_children(vec![page.into(), overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
