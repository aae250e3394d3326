//! Dashboard summary counters.

use crate::model::achievement::Achievement;
use crate::model::challenge::{Challenge, ChallengeStatus};
use crate::model::habit::Habit;
use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Tasks whose due date falls on `today` (UTC calendar day).
    pub tasks_due_today: usize,
    pub active_habits: usize,
    /// Highest `best_streak` across all habits; 0 without habits.
    pub best_streak: u32,
    pub active_challenges: usize,
    pub earned_achievements: usize,
}

impl DashboardSummary {
    pub fn compute(
        tasks: &[Task],
        habits: &[Habit],
        challenges: &[Challenge],
        achievements: &[Achievement],
        today: NaiveDate,
    ) -> Self {
        Self {
            completed_tasks: count_tasks(tasks, TaskStatus::Completed),
            pending_tasks: count_tasks(tasks, TaskStatus::Pending),
            tasks_due_today: tasks
                .iter()
                .filter(|task| task.due_date.is_some_and(|due| due.date_naive() == today))
                .count(),
            active_habits: habits.iter().filter(|habit| habit.is_active).count(),
            best_streak: habits
                .iter()
                .map(|habit| habit.best_streak)
                .max()
                .unwrap_or(0),
            active_challenges: challenges
                .iter()
                .filter(|challenge| challenge.status == ChallengeStatus::Active)
                .count(),
            earned_achievements: achievements.iter().filter(|a| a.earned).count(),
        }
    }
}

fn count_tasks(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status == status).count()
}
