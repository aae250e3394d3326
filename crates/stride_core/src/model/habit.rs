//! Habit domain model.
//!
//! # Invariants
//! - `current_streak`, `best_streak` and `completions` start zeroed/empty and
//!   cannot be supplied at creation.
//! - `best_streak >= current_streak` is the caller's responsibility; the
//!   model stores whatever a patch carries.
//! - The store derives nothing for habits: streak math lives in
//!   `service::streak`.

use super::validation::{require_at_least, require_non_blank, InputValidationError};
use super::{deserialize_present, merge_field, Record, RecordId, RecordKind, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_ICON: &str = "fas fa-check";

/// Logged progress for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCompletion {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    pub target_value: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub completions: Vec<HabitCompletion>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_target_value")]
    pub target_value: u32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_target_value() -> u32 {
    1
}

fn default_is_active() -> bool {
    true
}

impl NewHabit {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            icon: default_icon(),
            target_value: default_target_value(),
            is_active: default_is_active(),
        }
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        require_non_blank("name", &self.name)?;
        require_at_least("targetValue", 1, self.target_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    pub icon: Option<String>,
    pub target_value: Option<u32>,
    pub current_streak: Option<u32>,
    pub best_streak: Option<u32>,
    pub completions: Option<Vec<HabitCompletion>>,
    pub is_active: Option<bool>,
}

impl Habit {
    pub fn new(input: NewHabit, now: Timestamp) -> Self {
        Self::with_id(Uuid::new_v4(), input, now)
    }

    pub fn with_id(id: RecordId, input: NewHabit, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            icon: input.icon,
            target_value: input.target_value,
            current_streak: 0,
            best_streak: 0,
            completions: Vec::new(),
            is_active: input.is_active,
            created_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: HabitPatch) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.icon, patch.icon);
        merge_field(&mut self.target_value, patch.target_value);
        merge_field(&mut self.current_streak, patch.current_streak);
        merge_field(&mut self.best_streak, patch.best_streak);
        merge_field(&mut self.completions, patch.completions);
        merge_field(&mut self.is_active, patch.is_active);
    }

    /// Returns the logged entry for `date`, if any.
    pub fn completion_on(&self, date: NaiveDate) -> Option<&HabitCompletion> {
        self.completions.iter().find(|entry| entry.date == date)
    }

    /// Whether the value logged for `date` reaches `target_value`.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completion_on(date)
            .is_some_and(|entry| entry.value >= self.target_value)
    }

    pub fn has_consistent_streaks(&self) -> bool {
        self.best_streak >= self.current_streak
    }
}

impl Record for Habit {
    const KIND: RecordKind = RecordKind::Habit;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
