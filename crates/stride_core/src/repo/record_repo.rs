//! Repository traits for tasks, habits, challenges and achievements.
//!
//! # Responsibility
//! - Fix the five-operation contract (four for achievements) every backend
//!   must honor.
//!
//! # Invariants
//! - `list_*` for tasks, habits and challenges is newest-first by
//!   `created_at`; `list_achievements` keeps insertion order.
//! - `create_*` assigns `id`, `created_at` and derived defaults itself;
//!   `New*` inputs have no slot for them.

use crate::model::achievement::{Achievement, AchievementPatch, NewAchievement};
use crate::model::challenge::{Challenge, ChallengePatch, NewChallenge};
use crate::model::habit::{Habit, HabitPatch, NewHabit};
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::model::{RecordId, RecordKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage failure. Not-found is not an error at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A writer panicked while holding the collection guard.
    LockPoisoned(RecordKind),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned(kind) => write!(f, "{kind} collection lock poisoned"),
        }
    }
}

impl Error for RepoError {}

pub trait TaskRepository {
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn get_task(&self, id: RecordId) -> RepoResult<Option<Task>>;
    fn create_task(&self, input: NewTask) -> RepoResult<Task>;
    fn update_task(&self, id: RecordId, patch: TaskPatch) -> RepoResult<Option<Task>>;
    fn delete_task(&self, id: RecordId) -> RepoResult<bool>;
}

pub trait HabitRepository {
    fn list_habits(&self) -> RepoResult<Vec<Habit>>;
    fn get_habit(&self, id: RecordId) -> RepoResult<Option<Habit>>;
    fn create_habit(&self, input: NewHabit) -> RepoResult<Habit>;
    fn update_habit(&self, id: RecordId, patch: HabitPatch) -> RepoResult<Option<Habit>>;
    fn delete_habit(&self, id: RecordId) -> RepoResult<bool>;
}

pub trait ChallengeRepository {
    fn list_challenges(&self) -> RepoResult<Vec<Challenge>>;
    fn get_challenge(&self, id: RecordId) -> RepoResult<Option<Challenge>>;
    fn create_challenge(&self, input: NewChallenge) -> RepoResult<Challenge>;
    fn update_challenge(
        &self,
        id: RecordId,
        patch: ChallengePatch,
    ) -> RepoResult<Option<Challenge>>;
    fn delete_challenge(&self, id: RecordId) -> RepoResult<bool>;
}

/// Achievements are permanent: there is no delete operation.
pub trait AchievementRepository {
    fn list_achievements(&self) -> RepoResult<Vec<Achievement>>;
    fn get_achievement(&self, id: RecordId) -> RepoResult<Option<Achievement>>;
    fn create_achievement(&self, input: NewAchievement) -> RepoResult<Achievement>;
    fn update_achievement(
        &self,
        id: RecordId,
        patch: AchievementPatch,
    ) -> RepoResult<Option<Achievement>>;
}

/// Full record store: every entity repository behind one value.
pub trait TrackerStore:
    TaskRepository + HabitRepository + ChallengeRepository + AchievementRepository
{
}

impl<T> TrackerStore for T where
    T: TaskRepository + HabitRepository + ChallengeRepository + AchievementRepository
{
}
