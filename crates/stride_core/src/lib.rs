//! Core domain logic for the Stride productivity tracker.
//! This crate owns all task, habit, challenge and achievement state.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::achievement::{Achievement, AchievementKind, AchievementPatch, NewAchievement};
pub use model::challenge::{
    Badge, Challenge, ChallengeCompletion, ChallengePatch, ChallengeStatus, NewChallenge,
};
pub use model::habit::{Habit, HabitCompletion, HabitPatch, NewHabit};
pub use model::task::{NewTask, Subtask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::validation::InputValidationError;
pub use model::{Record, RecordId, RecordKind, Timestamp};
pub use repo::memory_store::MemoryStore;
pub use repo::record_repo::{
    AchievementRepository, ChallengeRepository, HabitRepository, RepoError, RepoResult,
    TaskRepository, TrackerStore,
};
pub use service::dashboard::DashboardSummary;
pub use service::streak::{DailyToggle, StreakCalculator};
pub use service::task_filter::TaskFilter;
pub use service::tracker_service::{ServiceError, ServiceResult, TrackerService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
