//! Task list views.
//!
//! Filters compare due dates by UTC calendar day, the same rule the
//! dashboard uses for `tasks_due_today`.

use crate::model::task::{Task, TaskPriority, TaskStatus};
use chrono::{Days, NaiveDate};

/// Days after `today` still counted as "this week".
const WEEK_SPAN_DAYS: u64 = 7;

/// Named task list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    /// Due on `today`.
    DueToday,
    /// Due between `today` and `today + 7` days, both inclusive.
    DueThisWeek,
    HighPriority,
    Pending,
    Completed,
    /// Exact category match; uncategorized tasks never match.
    Category(String),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        let due_day = task.due_date.map(|due| due.date_naive());
        match self {
            Self::All => true,
            Self::DueToday => due_day == Some(today),
            Self::DueThisWeek => {
                let week_end = today
                    .checked_add_days(Days::new(WEEK_SPAN_DAYS))
                    .unwrap_or(NaiveDate::MAX);
                due_day.is_some_and(|day| day >= today && day <= week_end)
            }
            Self::HighPriority => task.priority == TaskPriority::High,
            Self::Pending => task.status == TaskStatus::Pending,
            Self::Completed => task.status == TaskStatus::Completed,
            Self::Category(category) => task.category.as_deref() == Some(category.as_str()),
        }
    }

    /// Keeps matching tasks in their incoming order.
    pub fn apply(&self, tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task, today))
            .collect()
    }
}
