// SPDX-License-Identifier: MPL-2.0
//! Client intake screen: the form a coach fills in for a new client.
//!
//! The form state is a [`ClientIntake`] payload edited in place; submitting
//! hands the payload to the parent, which performs the POST and decides
//! whether to clear the form.

use crate::api::models::ClientIntake;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, checkbox, pick_list, scrollable, text, text_input, Column, Container, Row};
use iced::{alignment, Element, Length};

pub const AGE_GROUPS: [&str; 6] = ["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
pub const LOCATIONS: [&str; 3] = ["Home", "Gym", "Outdoors"];
pub const SPACE_OPTIONS: [&str; 3] = ["Small", "Medium", "Large"];
pub const IMPACT_OPTIONS: [&str; 3] = ["Low", "Moderate", "High"];
pub const SESSION_LENGTHS: [u16; 5] = [30, 45, 60, 75, 90];
pub const DAYS_PER_WEEK: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];
pub const GOAL_OPTIONS: [&str; 5] = [
    "Strength",
    "Hypertrophy",
    "Fat Loss",
    "Endurance",
    "Mobility",
];

/// State for the intake screen.
#[derive(Debug, Default)]
pub struct State {
    form: ClientIntake,
    is_submitting: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the form after a successful submission.
    pub fn reset(&mut self) {
        self.form = ClientIntake::default();
        self.is_submitting = false;
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }

    #[must_use]
    pub fn form(&self) -> &ClientIntake {
        &self.form
    }
}

/// Messages emitted by the intake form.
#[derive(Debug, Clone)]
pub enum Message {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    AgeGroupSelected(&'static str),
    LocationSelected(&'static str),
    SpaceSelected(&'static str),
    ImpactSelected(&'static str),
    SessionLengthSelected(u16),
    DaysPerWeekSelected(u8),
    GoalToggled(&'static str, bool),
    KneeIssueToggled(bool),
    ShoulderIssueToggled(bool),
    BackIssueToggled(bool),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form is complete; create the client.
    Submit(ClientIntake),
    /// The form failed validation; show the message to the coach.
    Invalid(&'static str),
}

/// Processes an intake message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FirstNameChanged(value) => state.form.first_name = value,
        Message::LastNameChanged(value) => state.form.last_name = value,
        Message::EmailChanged(value) => state.form.email = value,
        Message::PhoneChanged(value) => state.form.phone = value,
        Message::AgeGroupSelected(value) => state.form.age_group = value.to_string(),
        Message::LocationSelected(value) => state.form.primary_location = value.to_string(),
        Message::SpaceSelected(value) => state.form.space_available = value.to_string(),
        Message::ImpactSelected(value) => state.form.impact_tolerance = value.to_string(),
        Message::SessionLengthSelected(value) => state.form.session_length_min = value,
        Message::DaysPerWeekSelected(value) => state.form.days_per_week = value,
        Message::GoalToggled(goal, checked) => {
            if checked {
                if !state.form.goals.iter().any(|g| g == goal) {
                    state.form.goals.push(goal.to_string());
                }
            } else {
                state.form.goals.retain(|g| g != goal);
            }
        }
        Message::KneeIssueToggled(value) => state.form.knee_issue = value,
        Message::ShoulderIssueToggled(value) => state.form.shoulder_issue = value,
        Message::BackIssueToggled(value) => state.form.back_issue = value,
        Message::Submit => {
            if state.form.first_name.trim().is_empty() {
                return Event::Invalid("First name is required");
            }
            if state.form.last_name.trim().is_empty() {
                return Event::Invalid("Last name is required");
            }
            state.is_submitting = true;
            return Event::Submit(state.form.clone());
        }
    }
    Event::None
}

/// Renders the intake form.
pub fn view(state: &State) -> Element<'_, Message> {
    let form = &state.form;

    let name_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            "First name",
            "Jordan",
            &form.first_name,
            Message::FirstNameChanged,
        ))
        .push(labeled_input(
            "Last name",
            "Okafor",
            &form.last_name,
            Message::LastNameChanged,
        ));

    let contact_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_input(
            "Email",
            "jordan@example.com",
            &form.email,
            Message::EmailChanged,
        ))
        .push(labeled_input(
            "Phone",
            "+1 555 0100",
            &form.phone,
            Message::PhoneChanged,
        ));

    let profile_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_pick(
            "Age group",
            &AGE_GROUPS[..],
            form.age_group.as_str(),
            Message::AgeGroupSelected,
        ))
        .push(labeled_pick(
            "Training location",
            &LOCATIONS[..],
            form.primary_location.as_str(),
            Message::LocationSelected,
        ));

    let environment_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_pick(
            "Space available",
            &SPACE_OPTIONS[..],
            form.space_available.as_str(),
            Message::SpaceSelected,
        ))
        .push(labeled_pick(
            "Impact tolerance",
            &IMPACT_OPTIONS[..],
            form.impact_tolerance.as_str(),
            Message::ImpactSelected,
        ));

    let schedule_row = Row::new()
        .spacing(spacing::MD)
        .push(labeled_field(
            "Session length (min)",
            pick_list(
                SESSION_LENGTHS,
                Some(form.session_length_min),
                Message::SessionLengthSelected,
            )
            .width(Length::Fill)
            .into(),
        ))
        .push(labeled_field(
            "Days per week",
            pick_list(
                DAYS_PER_WEEK,
                Some(form.days_per_week),
                Message::DaysPerWeekSelected,
            )
            .width(Length::Fill)
            .into(),
        ));

    let mut goal_boxes = Row::new().spacing(spacing::MD);
    for goal in GOAL_OPTIONS {
        let checked = form.goals.iter().any(|g| g == goal);
        goal_boxes = goal_boxes.push(
            checkbox(checked)
                .label(goal)
                .on_toggle(move |value| Message::GoalToggled(goal, value)),
        );
    }

    let issues = Row::new()
        .spacing(spacing::MD)
        .push(
            checkbox(form.knee_issue)
                .label("Knee issues")
                .on_toggle(Message::KneeIssueToggled),
        )
        .push(
            checkbox(form.shoulder_issue)
                .label("Shoulder issues")
                .on_toggle(Message::ShoulderIssueToggled),
        )
        .push(
            checkbox(form.back_issue)
                .label("Back issues")
                .on_toggle(Message::BackIssueToggled),
        );

    let submit_label = if state.is_submitting {
        "Creating…"
    } else {
        "Create client"
    };
    let mut submit = button(text(submit_label).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG]);
    if !state.is_submitting {
        submit = submit.on_press(Message::Submit);
    }

    let form_column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::FORM_WIDTH)
        .push(text("Client Intake").size(typography::TITLE_LG))
        .push(name_row)
        .push(contact_row)
        .push(profile_row)
        .push(environment_row)
        .push(schedule_row)
        .push(section_label("Goals"))
        .push(goal_boxes)
        .push(section_label("Considerations"))
        .push(issues)
        .push(submit);

    Container::new(scrollable(form_column))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn section_label(label: &'static str) -> Element<'static, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn labeled_field<'a>(
    label: &'static str,
    field: Element<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(label).size(typography::BODY))
        .push(field)
        .into()
}

fn labeled_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    labeled_field(
        label,
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(spacing::XS)
            .into(),
    )
}

fn labeled_pick(
    label: &'static str,
    options: &'static [&'static str],
    selected: &str,
    on_select: fn(&'static str) -> Message,
) -> Element<'static, Message> {
    let current = options.iter().copied().find(|o| *o == selected);
    labeled_field(
        label,
        pick_list(options, current, on_select).width(Length::Fill).into(),
    )
}
