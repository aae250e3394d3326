//! Habit streak calculation.
//!
//! The record store never derives streaks; a calculator turns a habit and a
//! calendar day into the patch the caller sends back to the store.

use crate::model::habit::{Habit, HabitCompletion, HabitPatch};
use chrono::NaiveDate;

/// Computes the update that toggles a habit for one day.
pub trait StreakCalculator: Send + Sync {
    fn toggle(&self, habit: &Habit, date: NaiveDate) -> HabitPatch;
}

/// Day-at-a-time toggle used by the dashboard.
///
/// - Day already meets `target_value`: the entry is removed and
///   `current_streak` drops by one (floor 0).
/// - Otherwise: the day's entry becomes `target_value` and `current_streak`
///   grows by one.
///
/// `best_streak` is raised to `current_streak` when exceeded and never
/// lowered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyToggle;

impl StreakCalculator for DailyToggle {
    fn toggle(&self, habit: &Habit, date: NaiveDate) -> HabitPatch {
        let was_completed = habit.is_completed_on(date);

        let mut completions: Vec<HabitCompletion> = habit
            .completions
            .iter()
            .filter(|entry| entry.date != date)
            .cloned()
            .collect();

        let current_streak = if was_completed {
            habit.current_streak.saturating_sub(1)
        } else {
            completions.push(HabitCompletion {
                date,
                value: habit.target_value,
            });
            habit.current_streak.saturating_add(1)
        };

        HabitPatch {
            completions: Some(completions),
            current_streak: Some(current_streak),
            best_streak: Some(habit.best_streak.max(current_streak)),
            ..HabitPatch::default()
        }
    }
}
