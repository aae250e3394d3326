//! Starter achievements present in every freshly constructed store.
//!
//! Seeding runs once, synchronously, from `MemoryStore::new`; there is no
//! re-seed operation.

use crate::model::achievement::{Achievement, AchievementKind, NewAchievement};
use crate::model::Timestamp;

struct SeedAchievement {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    kind: AchievementKind,
    requirement: u32,
}

const SEED_ACHIEVEMENTS: [SeedAchievement; 3] = [
    SeedAchievement {
        name: "Fire Starter",
        description: "Complete a 7-day streak",
        icon: "fas fa-fire",
        kind: AchievementKind::Streak,
        requirement: 7,
    },
    SeedAchievement {
        name: "First Win",
        description: "Complete your first challenge",
        icon: "fas fa-trophy",
        kind: AchievementKind::Completion,
        requirement: 1,
    },
    SeedAchievement {
        name: "Consistent",
        description: "Maintain a 14-day streak",
        icon: "fas fa-star",
        kind: AchievementKind::Streak,
        requirement: 14,
    },
];

/// Builds the seed achievements, unearned and stamped with `now`.
///
/// Each call generates fresh IDs.
pub fn starter_achievements(now: Timestamp) -> Vec<Achievement> {
    SEED_ACHIEVEMENTS
        .iter()
        .map(|seed| {
            Achievement::new(
                NewAchievement {
                    name: seed.name.to_string(),
                    description: Some(seed.description.to_string()),
                    icon: seed.icon.to_string(),
                    kind: seed.kind,
                    requirement: seed.requirement,
                },
                now,
            )
        })
        .collect()
}
