// SPDX-License-Identifier: MPL-2.0
//! JSON payloads exchanged with the coaching backend.
//!
//! Field names follow the backend's wire format exactly; the structs here
//! are dumb data carriers, policy lives in the screens that use them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The signed-in coach, from `GET /api/auth/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A coached client, from `GET /api/clients/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub preferred_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub primary_location: String,
    #[serde(default)]
    pub days_per_week: u8,
    #[serde(default)]
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Name used in headings: the preferred name when set, else the first name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.preferred_name.is_empty() {
            &self.first_name
        } else {
            &self.preferred_name
        }
    }

    /// "First Last" for lists and pick-lists.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Intake form payload for `POST /api/clients/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientIntake {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age_group: String,
    pub primary_location: String,
    pub space_available: String,
    pub impact_tolerance: String,
    pub session_length_min: u16,
    pub days_per_week: u8,
    pub goals: Vec<String>,
    pub knee_issue: bool,
    pub shoulder_issue: bool,
    pub back_issue: bool,
}

impl Default for ClientIntake {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            age_group: "25-34".to_string(),
            primary_location: "Home".to_string(),
            space_available: "Medium".to_string(),
            impact_tolerance: "Moderate".to_string(),
            session_length_min: 45,
            days_per_week: 3,
            goals: Vec::new(),
            knee_issue: false,
            shoulder_issue: false,
            back_issue: false,
        }
    }
}

/// One prescribed exercise inside a generated plan day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub name: String,
    #[serde(default)]
    pub movement_pattern: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    pub sets: u32,
    pub reps: u32,
    pub rest_s: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A generated workout plan, from `GET /api/clients/{id}/plan/`.
///
/// Days are keyed "Day 1", "Day 2", ...; `BTreeMap` keeps them in display
/// order (plans never exceed seven days, so lexicographic order is fine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub client: String,
    pub plan: BTreeMap<String, Vec<PlanExercise>>,
}

impl WorkoutPlan {
    /// Total number of prescribed exercises across all days.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.plan.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_preferred_name() {
        let mut client: Client = serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "first_name": "Alexandra",
            "last_name": "Reyes",
            "preferred_name": "Alex",
            "created_at": "2025-11-02T09:30:00Z",
        }))
        .unwrap();
        assert_eq!(client.display_name(), "Alex");

        client.preferred_name.clear();
        assert_eq!(client.display_name(), "Alexandra");
    }

    #[test]
    fn intake_defaults_match_the_form() {
        let intake = ClientIntake::default();
        assert_eq!(intake.age_group, "25-34");
        assert_eq!(intake.primary_location, "Home");
        assert_eq!(intake.space_available, "Medium");
        assert_eq!(intake.impact_tolerance, "Moderate");
        assert_eq!(intake.session_length_min, 45);
        assert_eq!(intake.days_per_week, 3);
        assert!(intake.goals.is_empty());
        assert!(!intake.knee_issue && !intake.shoulder_issue && !intake.back_issue);
    }

    #[test]
    fn intake_serializes_with_wire_field_names() {
        let intake = ClientIntake {
            first_name: "Sam".into(),
            goals: vec!["Strength".into()],
            knee_issue: true,
            ..ClientIntake::default()
        };
        let json = serde_json::to_value(&intake).unwrap();
        assert_eq!(json["first_name"], "Sam");
        assert_eq!(json["session_length_min"], 45);
        assert_eq!(json["goals"][0], "Strength");
        assert_eq!(json["knee_issue"], true);
    }

    #[test]
    fn workout_plan_days_stay_ordered() {
        let plan: WorkoutPlan = serde_json::from_value(serde_json::json!({
            "client": "Alex",
            "plan": {
                "Day 2": [],
                "Day 1": [{"name": "Goblet Squat", "sets": 3, "reps": 10, "rest_s": 60}],
            }
        }))
        .unwrap();

        let days: Vec<&String> = plan.plan.keys().collect();
        assert_eq!(days, vec!["Day 1", "Day 2"]);
        assert_eq!(plan.exercise_count(), 1);
    }
}
