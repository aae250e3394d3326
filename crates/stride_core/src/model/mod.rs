//! Domain model for tasks, habits, challenges and achievements.
//!
//! # Responsibility
//! - Define the canonical record shapes and their enumerated value domains.
//! - Separate caller-supplied create inputs (`New*`) from server-managed
//!   fields, and describe shallow-merge update patches (`*Patch`).
//!
//! # Invariants
//! - Every record is identified by a `RecordId` assigned at creation and
//!   never reassigned.
//! - `id` and `created_at` never appear in create inputs or patches.
//! - Wire field names are camelCase and must stay stable for API callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod achievement;
pub mod challenge;
pub mod habit;
pub mod task;
pub mod validation;

/// Stable identifier of a top-level record.
pub type RecordId = Uuid;

/// UTC instant; serialized as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Entity kind, used to label collections in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Task,
    Habit,
    Challenge,
    Achievement,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Habit => "habit",
            Self::Challenge => "challenge",
            Self::Achievement => "achievement",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common accessors the record store needs from every entity.
pub trait Record: Clone {
    const KIND: RecordKind;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> Timestamp;
}

/// Deserializes a present field (including explicit `null`) as `Some(..)`.
///
/// Used with `#[serde(default)]` on `Option<Option<T>>` patch fields:
/// missing keeps the stored value, `null` clears it, a value replaces it.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Overwrites `target` when the patch carries a value.
pub(crate) fn merge_field<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
