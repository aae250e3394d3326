//! Task domain model.
//!
//! # Responsibility
//! - Define the task record, its create input and its update patch.
//! - Derive `completed_at` from status transitions.
//!
//! # Invariants
//! - `completed_at` is `None` right after creation.
//! - A patch setting `status = completed` over a non-completed task stamps
//!   `completed_at`; a patch setting `status = pending` clears it.
//! - `subtasks` are replaced wholesale by a patch, never merged per element.

use super::validation::{require_non_blank, InputValidationError};
use super::{deserialize_present, merge_field, Record, RecordId, RecordKind, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_CATEGORY: &str = "work";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Returns the opposite status, used by the completion toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// Checklist item embedded in a task. Ids are chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<Timestamp>,
    pub category: Option<String>,
    pub subtasks: Vec<Subtask>,
    /// Set when the task transitions into `completed`.
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Caller-supplied fields for a new task.
///
/// Server-managed fields (`id`, `createdAt`, `completedAt`) have no slot here,
/// so they are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default = "default_category")]
    pub category: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

fn default_category() -> Option<String> {
    Some(DEFAULT_CATEGORY.to_string())
}

impl NewTask {
    /// Creates an input with schema defaults for every optional field.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            due_date: None,
            category: default_category(),
            subtasks: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), InputValidationError> {
        require_non_blank("title", &self.title)
    }
}

/// Shallow-merge update for a task.
///
/// Nullable fields are tri-state: missing keeps, `null` clears, value sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<Option<String>>,
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Task {
    /// Builds a task from caller input with a generated ID.
    pub fn new(input: NewTask, now: Timestamp) -> Self {
        Self::with_id(Uuid::new_v4(), input, now)
    }

    /// Builds a task from caller input with an explicit ID.
    ///
    /// `completed_at` always starts empty, even when the input status is
    /// already `completed`.
    pub fn with_id(id: RecordId, input: NewTask, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            priority: input.priority,
            status: input.status,
            due_date: input.due_date,
            category: input.category,
            subtasks: input.subtasks,
            completed_at: None,
            created_at: now,
        }
    }

    /// Merges `patch` and re-derives `completed_at`.
    pub fn apply_patch(&mut self, patch: TaskPatch, now: Timestamp) {
        let prior_status = self.status;

        merge_field(&mut self.title, patch.title);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.priority, patch.priority);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.due_date, patch.due_date);
        merge_field(&mut self.category, patch.category);
        merge_field(&mut self.subtasks, patch.subtasks);

        match patch.status {
            Some(TaskStatus::Completed) if prior_status != TaskStatus::Completed => {
                self.completed_at = Some(now);
            }
            Some(TaskStatus::Pending) => self.completed_at = None,
            _ => {}
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Record for Task {
    const KIND: RecordKind = RecordKind::Task;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::{NewTask, Task, TaskPatch, TaskStatus};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn completing_twice_keeps_first_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut task = Task::new(NewTask::titled("write report"), t0);

        task.apply_patch(TaskPatch::status(TaskStatus::Completed), t0 + Duration::hours(1));
        let first = task.completed_at;
        task.apply_patch(TaskPatch::status(TaskStatus::Completed), t0 + Duration::hours(2));

        assert_eq!(task.completed_at, first);
        assert_eq!(first, Some(t0 + Duration::hours(1)));
    }

    #[test]
    fn pending_clears_completion_even_when_already_pending() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut task = Task::new(NewTask::titled("inbox zero"), t0);
        task.completed_at = Some(t0);

        task.apply_patch(TaskPatch::status(TaskStatus::Pending), t0);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn new_task_ignores_completed_status_for_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut input = NewTask::titled("already done");
        input.status = TaskStatus::Completed;

        let task = Task::new(input, t0);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn patch_tri_state_distinguishes_null_from_missing() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"description": null, "title": "renamed"}"#).unwrap();
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.category, None);
        assert_eq!(patch.title.as_deref(), Some("renamed"));
    }
}
