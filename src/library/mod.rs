// SPDX-License-Identifier: MPL-2.0
//! Exercise library: the catalog rows served by the backend and the
//! client-side filtering used by the exercise browser.
//!
//! The backend exposes the library as CSV-shaped rows whose keys are the
//! canonical spreadsheet column headers ("Movement Pattern",
//! "Default Rest (s)", ...). Values are strings throughout, including
//! "TRUE"/"FALSE" friendliness flags, so the struct mirrors that and
//! offers typed accessors on top.

use serde::{Deserialize, Serialize};

/// Equipment categories offered by the browser's filter.
pub const EQUIPMENT_OPTIONS: &[&str] = &[
    "Bodyweight",
    "Dumbbells",
    "Kettlebell",
    "Barbell",
    "Rings",
    "Gym Equipment",
    "Cable/Machine",
    "Bands/Chains",
    "Strongman",
    "Med Ball",
    "Cardio Machine",
];

/// Movement patterns offered by the browser's filter.
pub const MOVEMENT_OPTIONS: &[&str] = &[
    "Squat",
    "Hinge",
    "Horizontal Push",
    "Horizontal Pull",
    "Vertical Push",
    "Vertical Pull",
    "Lunge",
    "Core – Brace/Anti-Extension",
    "Carry/Gait",
    "Jump/Power",
    "Conditioning",
];

/// Skill levels offered by the browser's filter.
pub const LEVEL_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

/// One exercise row from the library.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, rename = "Exercise ID")]
    pub id: String,
    #[serde(default, rename = "Exercise")]
    pub name: String,
    #[serde(default, rename = "Movement Pattern")]
    pub movement_pattern: String,
    #[serde(default, rename = "Equipment")]
    pub equipment: String,
    #[serde(default, rename = "Skill Level")]
    pub skill_level: String,
    #[serde(default, rename = "Primary Muscle Group")]
    pub primary_muscle_group: String,
    #[serde(default, rename = "Default Sets")]
    pub default_sets: String,
    #[serde(default, rename = "Default Reps")]
    pub default_reps: String,
    #[serde(default, rename = "Default Rest (s)")]
    pub default_rest_s: String,
    #[serde(default, rename = "Coaching Cues")]
    pub coaching_cues: String,
    #[serde(default, rename = "Home-Friendly")]
    pub home_friendly: String,
    #[serde(default, rename = "Outdoor-Friendly")]
    pub outdoor_friendly: String,
    #[serde(default, rename = "Knee-Friendly")]
    pub knee_friendly: String,
    #[serde(default, rename = "Shoulder-Friendly")]
    pub shoulder_friendly: String,
    #[serde(default, rename = "Back-Friendly")]
    pub back_friendly: String,
}

impl Exercise {
    /// Parses a "TRUE"/"FALSE" column value. Empty or unknown values mean
    /// the library doesn't say, which is distinct from an explicit FALSE.
    fn flag(value: &str) -> Option<bool> {
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_home_friendly(&self) -> Option<bool> {
        Self::flag(&self.home_friendly)
    }

    #[must_use]
    pub fn is_knee_friendly(&self) -> Option<bool> {
        Self::flag(&self.knee_friendly)
    }

    #[must_use]
    pub fn is_shoulder_friendly(&self) -> Option<bool> {
        Self::flag(&self.shoulder_friendly)
    }

    #[must_use]
    pub fn is_back_friendly(&self) -> Option<bool> {
        Self::flag(&self.back_friendly)
    }
}

/// Browser-side filter over the catalog.
///
/// The search box is a case-insensitive substring match against the
/// exercise name, movement pattern, or primary muscle group. The three
/// selectors are exact matches; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub equipment: Option<String>,
    pub movement: Option<String>,
    pub level: Option<String>,
}

impl ExerciseFilter {
    /// Returns whether the filter lets everything through.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.equipment.is_none()
            && self.movement.is_none()
            && self.level.is_none()
    }

    /// Resets every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether an exercise passes every active criterion.
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            let hit = exercise.name.to_lowercase().contains(&term)
                || exercise.movement_pattern.to_lowercase().contains(&term)
                || exercise.primary_muscle_group.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(equipment) = &self.equipment {
            if &exercise.equipment != equipment {
                return false;
            }
        }
        if let Some(movement) = &self.movement {
            if &exercise.movement_pattern != movement {
                return false;
            }
        }
        if let Some(level) = &self.level {
            if &exercise.skill_level != level {
                return false;
            }
        }

        true
    }
}

/// Applies a filter, preserving catalog order.
#[must_use]
pub fn apply<'a>(exercises: &'a [Exercise], filter: &ExerciseFilter) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|exercise| filter.matches(exercise))
        .collect()
}

/// Small built-in catalog so the browser renders before (or without) a
/// backend connection.
#[must_use]
pub fn builtin_catalog() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "DB-001".into(),
            name: "Goblet Squat".into(),
            movement_pattern: "Squat".into(),
            equipment: "Dumbbells".into(),
            skill_level: "Beginner".into(),
            primary_muscle_group: "Quadriceps".into(),
            default_sets: "3".into(),
            default_reps: "10".into(),
            default_rest_s: "60".into(),
            coaching_cues: "Keep chest up, elbows inside knees, weight on heels".into(),
            home_friendly: "TRUE".into(),
            knee_friendly: "TRUE".into(),
            ..Exercise::default()
        },
        Exercise {
            id: "DB-002".into(),
            name: "Romanian Deadlift".into(),
            movement_pattern: "Hinge".into(),
            equipment: "Dumbbells".into(),
            skill_level: "Beginner".into(),
            primary_muscle_group: "Hamstrings".into(),
            default_sets: "3".into(),
            default_reps: "8".into(),
            default_rest_s: "90".into(),
            coaching_cues: "Soft knees, hinge at hips, neutral spine, shoulders back".into(),
            home_friendly: "TRUE".into(),
            back_friendly: "FALSE".into(),
            ..Exercise::default()
        },
        Exercise {
            id: "BW-001".into(),
            name: "Push-Up".into(),
            movement_pattern: "Horizontal Push".into(),
            equipment: "Bodyweight".into(),
            skill_level: "Beginner".into(),
            primary_muscle_group: "Chest".into(),
            default_sets: "3".into(),
            default_reps: "12".into(),
            default_rest_s: "60".into(),
            coaching_cues: "Hands under shoulders, tight core, full range, elbows 45°".into(),
            home_friendly: "TRUE".into(),
            shoulder_friendly: "FALSE".into(),
            ..Exercise::default()
        },
        Exercise {
            id: "RG-001".into(),
            name: "Inverted Row".into(),
            movement_pattern: "Horizontal Pull".into(),
            equipment: "Rings".into(),
            skill_level: "Intermediate".into(),
            primary_muscle_group: "Back".into(),
            default_sets: "3".into(),
            default_reps: "10".into(),
            default_rest_s: "60".into(),
            coaching_cues: "Pull chest to bar, squeeze shoulder blades, control descent".into(),
            home_friendly: "TRUE".into(),
            shoulder_friendly: "TRUE".into(),
            ..Exercise::default()
        },
        Exercise {
            id: "BW-002".into(),
            name: "Plank".into(),
            movement_pattern: "Core – Brace/Anti-Extension".into(),
            equipment: "Bodyweight".into(),
            skill_level: "Beginner".into(),
            primary_muscle_group: "Abs".into(),
            default_sets: "3".into(),
            default_reps: "30s hold".into(),
            default_rest_s: "45".into(),
            coaching_cues: "Straight line, tight core, squeeze glutes, neutral neck".into(),
            home_friendly: "TRUE".into(),
            back_friendly: "FALSE".into(),
            ..Exercise::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_passes_everything() {
        let catalog = builtin_catalog();
        let filter = ExerciseFilter::default();
        assert!(filter.is_empty());
        assert_eq!(apply(&catalog, &filter).len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_and_checks_three_fields() {
        let catalog = builtin_catalog();

        // By name
        let by_name = ExerciseFilter {
            search: "goblet".into(),
            ..ExerciseFilter::default()
        };
        assert_eq!(apply(&catalog, &by_name).len(), 1);

        // By movement pattern
        let by_pattern = ExerciseFilter {
            search: "HINGE".into(),
            ..ExerciseFilter::default()
        };
        assert_eq!(apply(&catalog, &by_pattern)[0].name, "Romanian Deadlift");

        // By primary muscle group
        let by_muscle = ExerciseFilter {
            search: "chest".into(),
            ..ExerciseFilter::default()
        };
        assert_eq!(apply(&catalog, &by_muscle)[0].name, "Push-Up");
    }

    #[test]
    fn selectors_are_exact_matches() {
        let catalog = builtin_catalog();

        let dumbbells = ExerciseFilter {
            equipment: Some("Dumbbells".into()),
            ..ExerciseFilter::default()
        };
        assert_eq!(apply(&catalog, &dumbbells).len(), 2);

        let intermediate = ExerciseFilter {
            level: Some("Intermediate".into()),
            ..ExerciseFilter::default()
        };
        let hits = apply(&catalog, &intermediate);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Inverted Row");
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let catalog = builtin_catalog();
        let filter = ExerciseFilter {
            search: "row".into(),
            equipment: Some("Bodyweight".into()),
            ..ExerciseFilter::default()
        };
        // "Inverted Row" matches the search but not the equipment.
        assert!(apply(&catalog, &filter).is_empty());
    }

    #[test]
    fn clear_resets_all_criteria() {
        let mut filter = ExerciseFilter {
            search: "plank".into(),
            equipment: Some("Bodyweight".into()),
            movement: Some("Squat".into()),
            level: Some("Beginner".into()),
        };
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn friendliness_flags_distinguish_unknown_from_false() {
        let catalog = builtin_catalog();
        let push_up = catalog.iter().find(|e| e.name == "Push-Up").unwrap();

        assert_eq!(push_up.is_home_friendly(), Some(true));
        assert_eq!(push_up.is_shoulder_friendly(), Some(false));
        assert_eq!(push_up.is_knee_friendly(), None);
    }

    #[test]
    fn deserializes_from_canonical_column_headers() {
        let exercise: Exercise = serde_json::from_str(
            r#"{
                "Exercise ID": "KB-101",
                "Exercise": "Kettlebell Swing",
                "Movement Pattern": "Hinge",
                "Equipment": "Kettlebell",
                "Skill Level": "Intermediate",
                "Primary Muscle Group": "Glutes",
                "Default Sets": "4",
                "Default Reps": "12",
                "Default Rest (s)": "75",
                "Coaching Cues": "Hinge, snap hips",
                "Home-Friendly": "TRUE",
                "Knee-Friendly": "TRUE"
            }"#,
        )
        .unwrap();

        assert_eq!(exercise.name, "Kettlebell Swing");
        assert_eq!(exercise.default_rest_s, "75");
        assert_eq!(exercise.is_knee_friendly(), Some(true));
        // Column absent from the payload
        assert_eq!(exercise.is_back_friendly(), None);
    }
}
