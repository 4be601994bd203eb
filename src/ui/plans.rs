// SPDX-License-Identifier: MPL-2.0
//! Plan generation screen.
//!
//! The coach picks a client, chooses whether to save the result on the
//! backend, and triggers generation. The generated plan is rendered one
//! section per training day.

use crate::api::models::{Client, PlanExercise, WorkoutPlan};
use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{button, checkbox, container, pick_list, scrollable, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};
use std::fmt;

/// A client entry in the pick-list; carries the id alongside the
/// displayed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientChoice {
    pub id: String,
    pub name: String,
}

impl fmt::Display for ClientChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&Client> for ClientChoice {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.clone(),
            name: client.full_name(),
        }
    }
}

/// State for the plans screen.
#[derive(Debug, Default)]
pub struct State {
    selected: Option<ClientChoice>,
    save_on_generate: bool,
    plan: Option<WorkoutPlan>,
    is_generating: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preselects a client (used when jumping here from the dashboard).
    pub fn select_client(&mut self, choice: ClientChoice) {
        self.selected = Some(choice);
    }

    pub fn set_plan(&mut self, plan: WorkoutPlan) {
        self.plan = Some(plan);
        self.is_generating = false;
    }

    pub fn set_generating(&mut self, generating: bool) {
        self.is_generating = generating;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ClientChoice> {
        self.selected.as_ref()
    }
}

/// Messages emitted by the plans screen.
#[derive(Debug, Clone)]
pub enum Message {
    ClientSelected(ClientChoice),
    SaveToggled(bool),
    Generate,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask the backend for a plan.
    Generate { client_id: String, save: bool },
    /// Generate was pressed with no client selected.
    NoClientSelected,
}

/// Processes a plans message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ClientSelected(choice) => {
            state.selected = Some(choice);
            Event::None
        }
        Message::SaveToggled(value) => {
            state.save_on_generate = value;
            Event::None
        }
        Message::Generate => match &state.selected {
            Some(choice) => {
                state.is_generating = true;
                Event::Generate {
                    client_id: choice.id.clone(),
                    save: state.save_on_generate,
                }
            }
            None => Event::NoClientSelected,
        },
    }
}

/// Renders the plans screen. The client list comes from the dashboard's
/// roster so both screens stay in sync.
pub fn view<'a>(state: &'a State, clients: &[Client]) -> Element<'a, Message> {
    let choices: Vec<ClientChoice> = clients.iter().map(ClientChoice::from).collect();

    let picker = pick_list(choices, state.selected.clone(), Message::ClientSelected)
        .placeholder("Select a client")
        .width(Length::Fixed(280.0));

    let save_box = checkbox(state.save_on_generate)
        .label("Save plan to client record")
        .on_toggle(Message::SaveToggled);

    let generate_label = if state.is_generating {
        "Generating…"
    } else {
        "Generate plan"
    };
    let mut generate = button(text(generate_label).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG]);
    if !state.is_generating {
        generate = generate.on_press(Message::Generate);
    }

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(picker)
        .push(save_box)
        .push(generate);

    let body: Element<'_, Message> = match &state.plan {
        Some(plan) => plan_view(plan),
        None => text("No plan generated yet.")
            .size(typography::BODY_LG)
            .into(),
    };

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(text("Generate Plans").size(typography::TITLE_LG))
            .push(controls)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn plan_view(plan: &WorkoutPlan) -> Element<'_, Message> {
    let summary = text(format!(
        "Plan for {} ({} exercises)",
        plan.client,
        plan.exercise_count()
    ))
    .size(typography::TITLE_SM);

    let mut days = Column::new().spacing(spacing::LG).push(summary);
    for (day, exercises) in &plan.plan {
        let mut section = Column::new()
            .spacing(spacing::XS)
            .push(text(day.as_str()).size(typography::BODY_LG));
        for exercise in exercises {
            section = section.push(exercise_row(exercise));
        }
        days = days.push(
            Container::new(section)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(day_card_style),
        );
    }

    scrollable(days).into()
}

fn exercise_row(exercise: &PlanExercise) -> Element<'_, Message> {
    let prescription = format!(
        "{} × {}, rest {}s",
        exercise.sets, exercise.reps, exercise.rest_s
    );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .push(
            Container::new(text(exercise.name.as_str()).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(text(prescription).size(typography::BODY));

    if let Some(notes) = &exercise.notes {
        row = row.push(text(notes.as_str()).size(typography::CAPTION));
    }

    row.into()
}

fn day_card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn choice() -> ClientChoice {
        ClientChoice {
            id: "c-3".into(),
            name: "Alex Reyes".into(),
        }
    }

    #[test]
    fn generate_without_selection_is_rejected() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::Generate),
            Event::NoClientSelected
        ));
        assert!(!state.is_generating);
    }

    #[test]
    fn generate_carries_selection_and_save_flag() {
        let mut state = State::new();
        update(&mut state, Message::ClientSelected(choice()));
        update(&mut state, Message::SaveToggled(true));

        match update(&mut state, Message::Generate) {
            Event::Generate { client_id, save } => {
                assert_eq!(client_id, "c-3");
                assert!(save);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
        assert!(state.is_generating);
    }

    #[test]
    fn set_plan_clears_the_generating_flag() {
        let mut state = State::new();
        state.set_generating(true);
        state.set_plan(WorkoutPlan {
            client: "Alex".into(),
            plan: BTreeMap::new(),
        });
        assert!(!state.is_generating);
        assert!(state.plan.is_some());
    }
}
