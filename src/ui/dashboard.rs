// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: the coach's client roster.
//!
//! Lists every client as a card with their training profile and a
//! per-client "Generate plan" action. Data comes from the backend; this
//! screen only holds the fetched list and loading flag.

use crate::api::models::Client;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, scrollable, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// State for the dashboard screen.
#[derive(Debug, Default)]
pub struct State {
    clients: Vec<Client>,
    is_loading: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster after a successful fetch.
    pub fn set_clients(&mut self, clients: Vec<Client>) {
        self.clients = clients;
        self.is_loading = false;
    }

    /// Appends a freshly created client without waiting for a refetch.
    pub fn add_client(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }
}

/// Messages emitted by the dashboard screen.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    GeneratePlan(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Re-fetch the client list from the backend.
    Refresh,
    /// Generate and save a plan for the given client id.
    GeneratePlan(String),
}

/// Processes a dashboard message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Refresh => {
            state.is_loading = true;
            Event::Refresh
        }
        Message::GeneratePlan(client_id) => Event::GeneratePlan(client_id),
    }
}

/// Renders the dashboard screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let title = text("Your Clients").size(typography::TITLE_LG);

    let refresh = button(text("Refresh").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::Refresh);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(refresh);

    let body: Element<'_, Message> = if state.is_loading {
        text("Loading clients…").size(typography::BODY_LG).into()
    } else if state.clients.is_empty() {
        Column::new()
            .spacing(spacing::SM)
            .push(text("No clients yet.").size(typography::BODY_LG))
            .push(
                text("Use the Client Intake screen to add your first client.")
                    .size(typography::BODY)
                    .style(secondary_text_style),
            )
            .into()
    } else {
        let mut cards = Column::new().spacing(spacing::MD);
        for client in &state.clients {
            cards = cards.push(client_card(client));
        }
        scrollable(cards).into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn client_card(client: &Client) -> Element<'_, Message> {
    let name = text(client.full_name()).size(typography::TITLE_SM);

    let email: Element<'_, Message> = if client.email.is_empty() {
        text("").into()
    } else {
        text(client.email.as_str())
            .size(typography::BODY)
            .style(secondary_text_style)
            .into()
    };

    let mut facts = Row::new().spacing(spacing::SM);
    if !client.age_group.is_empty() {
        facts = facts.push(badge(client.age_group.as_str(), palette::BRAND_500));
    }
    if !client.primary_location.is_empty() {
        facts = facts.push(badge(client.primary_location.as_str(), palette::INFO_500));
    }
    facts = facts.push(badge_owned(
        format!("{} days/week", client.days_per_week),
        palette::GRAY_400,
    ));

    let mut goals = Row::new().spacing(spacing::XS);
    for goal in &client.goals {
        goals = goals.push(badge(goal.as_str(), palette::WARNING_500));
    }

    let generate = button(text("Generate plan").size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::GeneratePlan(client.id.clone()));

    let details = Column::new()
        .spacing(spacing::XS)
        .push(name)
        .push(email)
        .push(facts)
        .push(goals);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(details).width(Length::Fill))
        .push(generate);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into()
}

/// Small pill-shaped tag with a tinted background.
fn badge(label: &str, color: Color) -> Element<'_, Message> {
    badge_owned(label.to_string(), color)
}

fn badge_owned(label: String, color: Color) -> Element<'static, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            })),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

fn secondary_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}
