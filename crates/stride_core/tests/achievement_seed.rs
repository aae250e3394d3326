use stride_core::{
    AchievementKind, AchievementPatch, AchievementRepository, MemoryStore, NewAchievement,
};
use uuid::Uuid;

#[test]
fn fresh_store_contains_seed_achievements_in_order() {
    let store = MemoryStore::new();
    let seeded = store.list_achievements().unwrap();

    let summary: Vec<_> = seeded
        .iter()
        .map(|a| (a.name.as_str(), a.kind, a.requirement))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Fire Starter", AchievementKind::Streak, 7),
            ("First Win", AchievementKind::Completion, 1),
            ("Consistent", AchievementKind::Streak, 14),
        ]
    );
    assert!(seeded.iter().all(|a| !a.earned && a.earned_at.is_none()));
}

#[test]
fn separate_stores_have_separate_seed_ids() {
    let first = MemoryStore::new().list_achievements().unwrap();
    let second = MemoryStore::new().list_achievements().unwrap();

    assert!(first
        .iter()
        .all(|a| second.iter().all(|b| b.id != a.id)));
}

#[test]
fn earning_sets_timestamp_once() {
    let store = MemoryStore::new();
    let target = store.list_achievements().unwrap()[0].clone();

    let earned = store
        .update_achievement(target.id, AchievementPatch::earned(true))
        .unwrap()
        .unwrap();
    let first_earned_at = earned.earned_at;
    assert!(first_earned_at.is_some());

    let again = store
        .update_achievement(target.id, AchievementPatch::earned(true))
        .unwrap()
        .unwrap();
    assert_eq!(again.earned_at, first_earned_at);

    let unearned = store
        .update_achievement(target.id, AchievementPatch::earned(false))
        .unwrap()
        .unwrap();
    assert!(!unearned.earned);
    assert_eq!(unearned.earned_at, first_earned_at);
}

#[test]
fn created_achievement_starts_unearned_and_is_appended() {
    let store = MemoryStore::new();
    let input: NewAchievement = serde_json::from_value(serde_json::json!({
        "name": "Marathon",
        "type": "milestone",
        "requirement": 42,
        "earned": true,
        "earnedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    let created = store.create_achievement(input).unwrap();
    assert!(!created.earned);
    assert_eq!(created.earned_at, None);
    assert_eq!(created.icon, "fas fa-star");
    assert_eq!(store.get_achievement(created.id).unwrap(), Some(created.clone()));

    let listed = store.list_achievements().unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[3], created);
}

#[test]
fn empty_update_and_unknown_id() {
    let store = MemoryStore::new();
    let target = store.list_achievements().unwrap()[1].clone();

    assert_eq!(
        store
            .update_achievement(target.id, AchievementPatch::default())
            .unwrap(),
        Some(target)
    );
    assert!(store
        .update_achievement(Uuid::new_v4(), AchievementPatch::earned(true))
        .unwrap()
        .is_none());
}

#[test]
fn empty_store_has_no_achievements() {
    assert!(MemoryStore::empty().list_achievements().unwrap().is_empty());
}
