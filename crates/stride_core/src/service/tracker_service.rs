//! Tracker use-case service.
//!
//! # Responsibility
//! - Validate create inputs before they reach the record store.
//! - Map store absence to `ServiceError::NotFound` for request handlers.
//! - Host the caller-side calculations (task toggle, habit streak toggle,
//!   challenge join, dashboard summary) on top of plain store updates.
//!
//! # Invariants
//! - The service never mutates records except through store operations.
//! - Update patches are forwarded without validation; a habit patch that
//!   leaves `best_streak < current_streak` is stored and only logged.
//! - `toggle_task`, `toggle_habit` and `join_challenge` read the record and
//!   write the patch in two separate store calls. They are not an atomic
//!   read-modify-write: a concurrent writer on the same record may land
//!   between the two, and the later patch wins.

use crate::model::achievement::{Achievement, AchievementPatch, NewAchievement};
use crate::model::challenge::{Challenge, ChallengePatch, ChallengeStatus, NewChallenge};
use crate::model::habit::{Habit, HabitPatch, NewHabit};
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::model::validation::InputValidationError;
use crate::model::{RecordId, RecordKind, Timestamp};
use crate::repo::record_repo::{RepoError, TrackerStore};
use crate::service::dashboard::DashboardSummary;
use crate::service::streak::{DailyToggle, StreakCalculator};
use crate::service::task_filter::TaskFilter;
use chrono::{Duration, NaiveDate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for tracker use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Create input rejected before reaching the store.
    Validation(InputValidationError),
    /// Target record does not exist.
    NotFound { kind: RecordKind, id: RecordId },
    /// Challenge window end date is not representable.
    ScheduleOverflow { id: RecordId, duration: u32 },
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::ScheduleOverflow { id, duration } => write!(
                f,
                "challenge {id}: end date overflows for duration {duration} days"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound { .. } | Self::ScheduleOverflow { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<InputValidationError> for ServiceError {
    fn from(value: InputValidationError) -> Self {
        Self::Validation(value)
    }
}

fn found<T>(kind: RecordKind, id: RecordId, value: Option<T>) -> ServiceResult<T> {
    value.ok_or(ServiceError::NotFound { kind, id })
}

fn deleted(kind: RecordKind, id: RecordId, removed: bool) -> ServiceResult<()> {
    if removed {
        info!("event={kind}_delete module=service status=ok id={id}");
        Ok(())
    } else {
        Err(ServiceError::NotFound { kind, id })
    }
}

/// Use-case facade over an explicitly constructed record store.
pub struct TrackerService<S: TrackerStore, C: StreakCalculator = DailyToggle> {
    store: S,
    streaks: C,
}

impl<S: TrackerStore> TrackerService<S> {
    /// Creates a service using the default daily streak toggle.
    pub fn new(store: S) -> Self {
        Self::with_streak_calculator(store, DailyToggle)
    }
}

impl<S: TrackerStore, C: StreakCalculator> TrackerService<S, C> {
    pub fn with_streak_calculator(store: S, streaks: C) -> Self {
        Self { store, streaks }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // Tasks

    pub fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.store.list_tasks()?)
    }

    /// Tasks matching `filter`, newest first.
    pub fn list_tasks_filtered(
        &self,
        filter: &TaskFilter,
        today: NaiveDate,
    ) -> ServiceResult<Vec<Task>> {
        Ok(filter.apply(self.store.list_tasks()?, today))
    }

    pub fn get_task(&self, id: RecordId) -> ServiceResult<Task> {
        found(RecordKind::Task, id, self.store.get_task(id)?)
    }

    pub fn create_task(&self, input: NewTask) -> ServiceResult<Task> {
        input.validate()?;
        let task = self.store.create_task(input)?;
        info!("event=task_create module=service status=ok id={}", task.id);
        Ok(task)
    }

    pub fn update_task(&self, id: RecordId, patch: TaskPatch) -> ServiceResult<Task> {
        found(RecordKind::Task, id, self.store.update_task(id, patch)?)
    }

    pub fn delete_task(&self, id: RecordId) -> ServiceResult<()> {
        deleted(RecordKind::Task, id, self.store.delete_task(id)?)
    }

    /// Flips a task between pending and completed.
    pub fn toggle_task(&self, id: RecordId) -> ServiceResult<Task> {
        let task = self.get_task(id)?;
        self.update_task(id, TaskPatch::status(task.status.toggled()))
    }

    // Habits

    pub fn list_habits(&self) -> ServiceResult<Vec<Habit>> {
        Ok(self.store.list_habits()?)
    }

    pub fn get_habit(&self, id: RecordId) -> ServiceResult<Habit> {
        found(RecordKind::Habit, id, self.store.get_habit(id)?)
    }

    pub fn create_habit(&self, input: NewHabit) -> ServiceResult<Habit> {
        input.validate()?;
        let habit = self.store.create_habit(input)?;
        info!("event=habit_create module=service status=ok id={}", habit.id);
        Ok(habit)
    }

    pub fn update_habit(&self, id: RecordId, patch: HabitPatch) -> ServiceResult<Habit> {
        let habit = found(RecordKind::Habit, id, self.store.update_habit(id, patch)?)?;
        if !habit.has_consistent_streaks() {
            warn!(
                "event=habit_update module=service status=inconsistent_streak id={} current={} best={}",
                habit.id, habit.current_streak, habit.best_streak
            );
        }
        Ok(habit)
    }

    pub fn delete_habit(&self, id: RecordId) -> ServiceResult<()> {
        deleted(RecordKind::Habit, id, self.store.delete_habit(id)?)
    }

    /// Marks `date` done (or undone) and sends the recomputed streaks.
    pub fn toggle_habit(&self, id: RecordId, date: NaiveDate) -> ServiceResult<Habit> {
        let habit = self.get_habit(id)?;
        let patch = self.streaks.toggle(&habit, date);
        self.update_habit(id, patch)
    }

    // Challenges

    pub fn list_challenges(&self) -> ServiceResult<Vec<Challenge>> {
        Ok(self.store.list_challenges()?)
    }

    pub fn get_challenge(&self, id: RecordId) -> ServiceResult<Challenge> {
        found(RecordKind::Challenge, id, self.store.get_challenge(id)?)
    }

    pub fn create_challenge(&self, input: NewChallenge) -> ServiceResult<Challenge> {
        input.validate()?;
        let challenge = self.store.create_challenge(input)?;
        info!(
            "event=challenge_create module=service status=ok id={}",
            challenge.id
        );
        Ok(challenge)
    }

    pub fn update_challenge(
        &self,
        id: RecordId,
        patch: ChallengePatch,
    ) -> ServiceResult<Challenge> {
        found(
            RecordKind::Challenge,
            id,
            self.store.update_challenge(id, patch)?,
        )
    }

    pub fn delete_challenge(&self, id: RecordId) -> ServiceResult<()> {
        deleted(RecordKind::Challenge, id, self.store.delete_challenge(id)?)
    }

    /// Activates a challenge window of `duration` days starting at `now`.
    pub fn join_challenge(&self, id: RecordId, now: Timestamp) -> ServiceResult<Challenge> {
        let challenge = self.get_challenge(id)?;
        let end = Duration::try_days(i64::from(challenge.duration))
            .and_then(|span| now.checked_add_signed(span))
            .ok_or(ServiceError::ScheduleOverflow {
                id,
                duration: challenge.duration,
            })?;
        self.update_challenge(
            id,
            ChallengePatch {
                status: Some(ChallengeStatus::Active),
                start_date: Some(Some(now)),
                end_date: Some(Some(end)),
                ..ChallengePatch::default()
            },
        )
    }

    // Achievements

    pub fn list_achievements(&self) -> ServiceResult<Vec<Achievement>> {
        Ok(self.store.list_achievements()?)
    }

    pub fn get_achievement(&self, id: RecordId) -> ServiceResult<Achievement> {
        found(RecordKind::Achievement, id, self.store.get_achievement(id)?)
    }

    pub fn create_achievement(&self, input: NewAchievement) -> ServiceResult<Achievement> {
        input.validate()?;
        let achievement = self.store.create_achievement(input)?;
        info!(
            "event=achievement_create module=service status=ok id={}",
            achievement.id
        );
        Ok(achievement)
    }

    pub fn update_achievement(
        &self,
        id: RecordId,
        patch: AchievementPatch,
    ) -> ServiceResult<Achievement> {
        found(
            RecordKind::Achievement,
            id,
            self.store.update_achievement(id, patch)?,
        )
    }

    /// Summarizes every collection for the dashboard view.
    pub fn dashboard(&self, today: NaiveDate) -> ServiceResult<DashboardSummary> {
        Ok(DashboardSummary::compute(
            &self.store.list_tasks()?,
            &self.store.list_habits()?,
            &self.store.list_challenges()?,
            &self.store.list_achievements()?,
            today,
        ))
    }
}
