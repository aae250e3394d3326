use chrono::NaiveDate;
use std::collections::HashSet;
use stride_core::{
    ChallengeCompletion, ChallengePatch, ChallengeRepository, ChallengeStatus, HabitCompletion,
    HabitPatch, HabitRepository, MemoryStore, NewChallenge, NewHabit,
};
use uuid::Uuid;

#[test]
fn habit_create_forces_zeroed_streaks() {
    let store = MemoryStore::new();
    let input: NewHabit = serde_json::from_value(serde_json::json!({
        "name": "Read",
        "targetValue": 2,
        "currentStreak": 40,
        "bestStreak": 99,
        "completions": [{ "date": "2026-01-01", "value": 2 }]
    }))
    .unwrap();

    let habit = store.create_habit(input).unwrap();

    assert_eq!(habit.target_value, 2);
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.best_streak, 0);
    assert!(habit.completions.is_empty());
    assert!(habit.is_active);
    assert_eq!(habit.icon, "fas fa-check");
}

#[test]
fn habit_create_then_get_roundtrip() {
    let store = MemoryStore::new();
    let created = store
        .create_habit(NewHabit {
            target_value: 3,
            ..NewHabit::named("Meditate")
        })
        .unwrap();

    let fetched = store.get_habit(created.id).unwrap();
    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(store.list_habits().unwrap(), vec![created]);
}

#[test]
fn habit_update_stores_caller_computed_values() {
    let store = MemoryStore::new();
    let habit = store.create_habit(NewHabit::named("Stretch")).unwrap();
    let day = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

    let updated = store
        .update_habit(
            habit.id,
            HabitPatch {
                current_streak: Some(3),
                best_streak: Some(1),
                completions: Some(vec![HabitCompletion { date: day, value: 1 }]),
                ..HabitPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.current_streak, 3);
    assert_eq!(updated.best_streak, 1);
    assert_eq!(updated.completions.len(), 1);
    assert_eq!(store.get_habit(habit.id).unwrap().unwrap(), updated);
}

#[test]
fn habit_empty_update_and_delete() {
    let store = MemoryStore::new();
    let habit = store.create_habit(NewHabit::named("Floss")).unwrap();

    assert_eq!(
        store.update_habit(habit.id, HabitPatch::default()).unwrap(),
        Some(habit.clone())
    );
    assert!(store.delete_habit(habit.id).unwrap());
    assert!(store.get_habit(habit.id).unwrap().is_none());
    assert!(!store.delete_habit(Uuid::new_v4()).unwrap());
}

#[test]
fn habits_list_newest_first() {
    let store = MemoryStore::new();
    let a = store.create_habit(NewHabit::named("a")).unwrap();
    let b = store.create_habit(NewHabit::named("b")).unwrap();

    let ids: Vec<_> = store.list_habits().unwrap().into_iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn challenge_create_seeds_three_distinct_badges() {
    let store = MemoryStore::new();
    let input: NewChallenge = serde_json::from_value(serde_json::json!({
        "title": "30-Day Plank",
        "duration": 30,
        "progress": 12,
        "badges": []
    }))
    .unwrap();

    let challenge = store.create_challenge(input).unwrap();

    assert_eq!(challenge.progress, 0);
    assert!(challenge.completions.is_empty());
    assert_eq!(challenge.status, ChallengeStatus::Available);
    assert_eq!(challenge.participants, 1);
    let names: Vec<_> = challenge.badges.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Starter", "Halfway", "Champion"]);
    assert!(challenge.badges.iter().all(|b| !b.earned && b.earned_at.is_none()));
    let ids: HashSet<_> = challenge.badges.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn challenge_create_then_get_roundtrip() {
    let store = MemoryStore::new();
    let created = store
        .create_challenge(NewChallenge::titled("Read Daily", 14))
        .unwrap();

    let fetched = store.get_challenge(created.id).unwrap();
    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(store.list_challenges().unwrap(), vec![created]);
}

#[test]
fn challenge_badge_ids_differ_between_challenges() {
    let store = MemoryStore::new();
    let first = store
        .create_challenge(NewChallenge::titled("Cold Showers", 21))
        .unwrap();
    let second = store
        .create_challenge(NewChallenge::titled("No Phone Mornings", 7))
        .unwrap();

    let first_ids: HashSet<_> = first.badges.iter().map(|b| b.id.clone()).collect();
    assert!(second.badges.iter().all(|b| !first_ids.contains(&b.id)));
}

#[test]
fn challenge_update_replaces_completions() {
    let store = MemoryStore::new();
    let challenge = store
        .create_challenge(NewChallenge::titled("Daily Sketch", 10))
        .unwrap();
    let day = |d| NaiveDate::from_ymd_opt(2026, 8, d).unwrap();

    store
        .update_challenge(
            challenge.id,
            ChallengePatch {
                completions: Some(vec![
                    ChallengeCompletion {
                        date: day(1),
                        completed: true,
                    },
                    ChallengeCompletion {
                        date: day(2),
                        completed: true,
                    },
                ]),
                progress: Some(2),
                ..ChallengePatch::default()
            },
        )
        .unwrap();
    let updated = store
        .update_challenge(
            challenge.id,
            ChallengePatch {
                completions: Some(vec![ChallengeCompletion {
                    date: day(3),
                    completed: true,
                }]),
                ..ChallengePatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.completions.len(), 1);
    assert_eq!(updated.completions[0].date, day(3));
    assert_eq!(updated.progress, 2);
    assert_eq!(updated.badges, challenge.badges);
}

#[test]
fn challenge_lifecycle_and_ordering() {
    let store = MemoryStore::new();
    let older = store.create_challenge(NewChallenge::titled("A", 5)).unwrap();
    let newer = store.create_challenge(NewChallenge::titled("B", 5)).unwrap();

    let ids: Vec<_> = store
        .list_challenges()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    assert_eq!(
        store
            .update_challenge(older.id, ChallengePatch::default())
            .unwrap(),
        Some(older.clone())
    );
    assert!(store.delete_challenge(older.id).unwrap());
    assert!(store.get_challenge(older.id).unwrap().is_none());
    assert!(!store.delete_challenge(Uuid::new_v4()).unwrap());
    assert!(store
        .update_challenge(older.id, ChallengePatch::default())
        .unwrap()
        .is_none());
}
