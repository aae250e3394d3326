//! Achievement domain model.
//!
//! # Invariants
//! - `earned_at` records the first transition into `earned = true` and is
//!   never cleared, even when `earned` is later set back to `false`.
//! - Achievements have no delete path.

use super::validation::{require_non_blank, InputValidationError};
use super::{deserialize_present, merge_field, Record, RecordId, RecordKind, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_ICON: &str = "fas fa-star";

/// What the `requirement` threshold counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Streak,
    Completion,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub requirement: u32,
    pub earned: bool,
    pub earned_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub requirement: u32,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl NewAchievement {
    pub fn validate(&self) -> Result<(), InputValidationError> {
        require_non_blank("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AchievementKind>,
    pub requirement: Option<u32>,
    pub earned: Option<bool>,
}

impl AchievementPatch {
    pub fn earned(earned: bool) -> Self {
        Self {
            earned: Some(earned),
            ..Self::default()
        }
    }
}

impl Achievement {
    pub fn new(input: NewAchievement, now: Timestamp) -> Self {
        Self::with_id(Uuid::new_v4(), input, now)
    }

    pub fn with_id(id: RecordId, input: NewAchievement, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            icon: input.icon,
            kind: input.kind,
            requirement: input.requirement,
            earned: false,
            earned_at: None,
            created_at: now,
        }
    }

    /// Merges `patch` and stamps `earned_at` on the first earn.
    pub fn apply_patch(&mut self, patch: AchievementPatch, now: Timestamp) {
        let was_earned = self.earned;

        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.icon, patch.icon);
        merge_field(&mut self.kind, patch.kind);
        merge_field(&mut self.requirement, patch.requirement);
        merge_field(&mut self.earned, patch.earned);

        if patch.earned == Some(true) && !was_earned {
            self.earned_at = Some(now);
        }
    }
}

impl Record for Achievement {
    const KIND: RecordKind = RecordKind::Achievement;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
