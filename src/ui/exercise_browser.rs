// SPDX-License-Identifier: MPL-2.0
//! Exercise library browser with search and category filters.
//!
//! Filtering is pure client-side work over the fetched catalog; the
//! screen never refetches just to filter. The three pick-lists use an
//! "All …" sentinel entry that maps back to `None` in the filter.

use crate::library::{
    apply, Exercise, ExerciseFilter, EQUIPMENT_OPTIONS, LEVEL_OPTIONS, MOVEMENT_OPTIONS,
};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, pick_list, scrollable, text, text_input, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

const ALL_EQUIPMENT: &str = "All equipment";
const ALL_MOVEMENTS: &str = "All movements";
const ALL_LEVELS: &str = "All levels";

/// State for the exercise browser.
#[derive(Debug, Default)]
pub struct State {
    catalog: Vec<Exercise>,
    filter: ExerciseFilter,
    is_loading: bool,
}

impl State {
    /// Starts from the built-in catalog; the real one replaces it once
    /// the backend responds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: crate::library::builtin_catalog(),
            ..Self::default()
        }
    }

    pub fn set_catalog(&mut self, catalog: Vec<Exercise>) {
        self.catalog = catalog;
        self.is_loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    #[must_use]
    pub fn filter(&self) -> &ExerciseFilter {
        &self.filter
    }
}

/// Messages emitted by the browser.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    EquipmentSelected(String),
    MovementSelected(String),
    LevelSelected(String),
    ClearFilters,
}

/// Processes a browser message. Filtering is local, so there is no event
/// to propagate.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::SearchChanged(value) => state.filter.search = value,
        Message::EquipmentSelected(value) => {
            state.filter.equipment = sentinel_to_option(value, ALL_EQUIPMENT);
        }
        Message::MovementSelected(value) => {
            state.filter.movement = sentinel_to_option(value, ALL_MOVEMENTS);
        }
        Message::LevelSelected(value) => {
            state.filter.level = sentinel_to_option(value, ALL_LEVELS);
        }
        Message::ClearFilters => state.filter.clear(),
    }
}

fn sentinel_to_option(value: String, sentinel: &str) -> Option<String> {
    if value == sentinel {
        None
    } else {
        Some(value)
    }
}

fn with_sentinel(sentinel: &str, options: &[&str]) -> Vec<String> {
    std::iter::once(sentinel)
        .chain(options.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Renders the exercise browser.
pub fn view(state: &State) -> Element<'_, Message> {
    let search = text_input("Search name, movement, or muscle…", &state.filter.search)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(280.0));

    let equipment = pick_list(
        with_sentinel(ALL_EQUIPMENT, EQUIPMENT_OPTIONS),
        Some(
            state
                .filter
                .equipment
                .clone()
                .unwrap_or_else(|| ALL_EQUIPMENT.to_string()),
        ),
        Message::EquipmentSelected,
    );

    let movement = pick_list(
        with_sentinel(ALL_MOVEMENTS, MOVEMENT_OPTIONS),
        Some(
            state
                .filter
                .movement
                .clone()
                .unwrap_or_else(|| ALL_MOVEMENTS.to_string()),
        ),
        Message::MovementSelected,
    );

    let level = pick_list(
        with_sentinel(ALL_LEVELS, LEVEL_OPTIONS),
        Some(
            state
                .filter
                .level
                .clone()
                .unwrap_or_else(|| ALL_LEVELS.to_string()),
        ),
        Message::LevelSelected,
    );

    let mut filters = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(search)
        .push(equipment)
        .push(movement)
        .push(level);

    if !state.filter.is_empty() {
        filters = filters.push(
            button(text("Clear").size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ClearFilters),
        );
    }

    let hits = apply(&state.catalog, &state.filter);

    let count_line = text(format!(
        "{} of {} exercises",
        hits.len(),
        state.catalog.len()
    ))
    .size(typography::BODY)
    .style(secondary_text_style);

    let body: Element<'_, Message> = if state.is_loading {
        text("Loading exercise library…")
            .size(typography::BODY_LG)
            .into()
    } else if hits.is_empty() {
        text("No exercises match the current filters.")
            .size(typography::BODY_LG)
            .into()
    } else {
        let mut cards = Column::new().spacing(spacing::MD);
        for exercise in hits {
            cards = cards.push(exercise_card(exercise));
        }
        scrollable(cards).into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(text("Exercise Library").size(typography::TITLE_LG))
            .push(filters)
            .push(count_line)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::XL)
    .into()
}

fn exercise_card(exercise: &Exercise) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(text(exercise.name.as_str()).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(level_badge(exercise.skill_level.as_str()));

    let mut tags = Row::new().spacing(spacing::XS);
    if !exercise.movement_pattern.is_empty() {
        tags = tags.push(tag(exercise.movement_pattern.as_str(), palette::BRAND_500));
    }
    if !exercise.equipment.is_empty() {
        tags = tags.push(tag(exercise.equipment.as_str(), palette::INFO_500));
    }
    if !exercise.primary_muscle_group.is_empty() {
        tags = tags.push(tag(exercise.primary_muscle_group.as_str(), palette::GRAY_400));
    }

    let prescription = text(format!(
        "{} sets × {} reps, rest {}s",
        exercise.default_sets, exercise.default_reps, exercise.default_rest_s
    ))
    .size(typography::BODY);

    let mut card = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(tags)
        .push(prescription);

    if !exercise.coaching_cues.is_empty() {
        card = card.push(
            text(exercise.coaching_cues.as_str())
                .size(typography::CAPTION)
                .style(secondary_text_style),
        );
    }

    if let Some(line) = friendliness_line(exercise) {
        card = card.push(
            text(line)
                .size(typography::CAPTION)
                .style(secondary_text_style),
        );
    }

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into()
}

/// Summarizes the friendliness flags the library states explicitly.
fn friendliness_line(exercise: &Exercise) -> Option<String> {
    let mut parts = Vec::new();
    for (label, flag) in [
        ("home", exercise.is_home_friendly()),
        ("knee", exercise.is_knee_friendly()),
        ("shoulder", exercise.is_shoulder_friendly()),
        ("back", exercise.is_back_friendly()),
    ] {
        match flag {
            Some(true) => parts.push(format!("{label}-friendly")),
            Some(false) => parts.push(format!("not {label}-friendly")),
            None => {}
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

fn level_badge(level: &str) -> Element<'_, Message> {
    let color = match level {
        "Beginner" => palette::SUCCESS_500,
        "Intermediate" => palette::WARNING_500,
        "Advanced" => palette::ERROR_500,
        _ => palette::GRAY_400,
    };
    tag(level, color)
}

fn tag(label: &str, color: Color) -> Element<'_, Message> {
    Container::new(text(label.to_string()).size(typography::CAPTION))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_builtin_catalog() {
        let state = State::new();
        assert!(!state.catalog.is_empty());
        assert!(state.filter().is_empty());
    }

    #[test]
    fn sentinel_selection_clears_the_criterion() {
        let mut state = State::new();
        update(&mut state, Message::EquipmentSelected("Dumbbells".into()));
        assert_eq!(state.filter().equipment.as_deref(), Some("Dumbbells"));

        update(&mut state, Message::EquipmentSelected(ALL_EQUIPMENT.into()));
        assert!(state.filter().equipment.is_none());
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut state = State::new();
        update(&mut state, Message::SearchChanged("squat".into()));
        update(&mut state, Message::LevelSelected("Advanced".into()));
        update(&mut state, Message::ClearFilters);
        assert!(state.filter().is_empty());
    }

    #[test]
    fn set_catalog_replaces_the_builtin_one() {
        let mut state = State::new();
        state.set_loading(true);
        state.set_catalog(vec![Exercise {
            name: "Farmer Carry".into(),
            ..Exercise::default()
        }]);
        assert_eq!(state.catalog.len(), 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn friendliness_line_reports_only_explicit_flags() {
        let exercise = Exercise {
            home_friendly: "TRUE".into(),
            back_friendly: "FALSE".into(),
            ..Exercise::default()
        };
        let line = friendliness_line(&exercise).unwrap();
        assert!(line.contains("home-friendly"));
        assert!(line.contains("not back-friendly"));
        assert!(!line.contains("knee"));
    }
}
