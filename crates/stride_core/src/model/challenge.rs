//! Challenge domain model.
//!
//! # Invariants
//! - A new challenge starts with `progress = 0`, no completions and exactly
//!   the three starter badges, each unearned and with a fresh ID.
//! - Patches replace `completions` and `badges` wholesale.

use super::validation::{require_at_least, require_non_blank, InputValidationError};
use super::{deserialize_present, merge_field, Record, RecordId, RecordKind, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_ICON: &str = "fas fa-trophy";
const DEFAULT_DURATION_DAYS: u32 = 30;

/// Name and icon of the badges every new challenge receives, in order.
pub const STARTER_BADGES: [(&str, &str); 3] = [
    ("Starter", "fas fa-play"),
    ("Halfway", "fas fa-star-half-alt"),
    ("Champion", "fas fa-trophy"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    #[default]
    Available,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeCompletion {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Badge embedded in a challenge.
///
/// `earnedAt` is omitted from the wire shape until the badge is earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<Timestamp>,
}

impl Badge {
    /// Fresh, unearned copies of `STARTER_BADGES`.
    pub fn starter_set() -> Vec<Badge> {
        STARTER_BADGES
            .iter()
            .map(|(name, icon)| Badge {
                id: Uuid::new_v4().to_string(),
                name: (*name).to_string(),
                icon: (*icon).to_string(),
                earned: false,
                earned_at: None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub icon: String,
    /// Length in days.
    pub duration: u32,
    pub participants: u32,
    /// Days completed so far; computed by the caller.
    pub progress: u32,
    pub status: ChallengeStatus,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub completions: Vec<ChallengeCompletion>,
    pub badges: Vec<Badge>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChallenge {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_participants")]
    pub participants: u32,
    #[serde(default)]
    pub status: ChallengeStatus,
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_DAYS
}

fn default_participants() -> u32 {
    1
}

impl NewChallenge {
    pub fn titled(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: default_icon(),
            duration,
            participants: default_participants(),
            status: ChallengeStatus::default(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        require_non_blank("title", &self.title)?;
        require_at_least("duration", 1, self.duration)?;
        require_at_least("participants", 1, self.participants)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    pub icon: Option<String>,
    pub duration: Option<u32>,
    pub participants: Option<u32>,
    pub progress: Option<u32>,
    pub status: Option<ChallengeStatus>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub end_date: Option<Option<Timestamp>>,
    pub completions: Option<Vec<ChallengeCompletion>>,
    pub badges: Option<Vec<Badge>>,
}

impl Challenge {
    pub fn new(input: NewChallenge, now: Timestamp) -> Self {
        Self::with_id(Uuid::new_v4(), input, now)
    }

    pub fn with_id(id: RecordId, input: NewChallenge, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            icon: input.icon,
            duration: input.duration,
            participants: input.participants,
            progress: 0,
            status: input.status,
            start_date: input.start_date,
            end_date: input.end_date,
            completions: Vec::new(),
            badges: Badge::starter_set(),
            created_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: ChallengePatch) {
        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.icon, patch.icon);
        merge_field(&mut self.duration, patch.duration);
        merge_field(&mut self.participants, patch.participants);
        merge_field(&mut self.progress, patch.progress);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.start_date, patch.start_date);
        merge_field(&mut self.end_date, patch.end_date);
        merge_field(&mut self.completions, patch.completions);
        merge_field(&mut self.badges, patch.badges);
    }

    /// Days left before `progress` reaches `duration`.
    pub fn days_remaining(&self) -> u32 {
        self.duration.saturating_sub(self.progress)
    }
}

impl Record for Challenge {
    const KIND: RecordKind = RecordKind::Challenge;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::{Badge, Challenge, ChallengePatch, NewChallenge};
    use chrono::Utc;

    #[test]
    fn unearned_badge_omits_earned_at_on_the_wire() {
        let badge = &Badge::starter_set()[0];
        let json = serde_json::to_value(badge).unwrap();
        assert!(json.get("earnedAt").is_none());
        assert_eq!(json["earned"], false);
    }

    #[test]
    fn badges_patch_replaces_whole_list() {
        let mut challenge = Challenge::new(NewChallenge::titled("No Sugar", 14), Utc::now());
        let mut kept = challenge.badges[0].clone();
        kept.earned = true;

        challenge.apply_patch(ChallengePatch {
            badges: Some(vec![kept.clone()]),
            ..ChallengePatch::default()
        });

        assert_eq!(challenge.badges, vec![kept]);
    }

    #[test]
    fn days_remaining_saturates() {
        let mut challenge = Challenge::new(NewChallenge::titled("Run", 10), Utc::now());
        challenge.progress = 12;
        assert_eq!(challenge.days_remaining(), 0);
    }
}
