use chrono::{NaiveDate, TimeZone, Utc};
use stride_core::{
    Challenge, Habit, HabitCompletion, NewChallenge, NewHabit, NewTask, Subtask, Task,
    TaskPriority,
};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
    let mut input = NewTask::titled("ship v1");
    input.priority = TaskPriority::High;
    input.due_date = Some(Utc.with_ymd_and_hms(2026, 2, 20, 17, 0, 0).unwrap());
    input.subtasks = vec![Subtask {
        id: "s1".to_string(),
        title: "changelog".to_string(),
        completed: false,
    }];
    let task = Task::with_id(id, input, created);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["priority"], "high");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["dueDate"], "2026-02-20T17:00:00Z");
    assert_eq!(json["category"], "work");
    assert_eq!(json["subtasks"][0]["completed"], false);
    assert!(json["completedAt"].is_null());
    assert!(json["description"].is_null());
    assert_eq!(json["createdAt"], "2026-02-13T10:00:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn habit_serialization_uses_camel_case_and_plain_dates() {
    let mut habit = Habit::new(
        NewHabit {
            target_value: 8,
            ..NewHabit::named("Water")
        },
        Utc::now(),
    );
    habit.completions.push(HabitCompletion {
        date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        value: 5,
    });

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["targetValue"], 8);
    assert_eq!(json["currentStreak"], 0);
    assert_eq!(json["bestStreak"], 0);
    assert_eq!(json["isActive"], true);
    assert_eq!(json["completions"][0]["date"], "2026-03-09");
    assert_eq!(json["completions"][0]["value"], 5);
}

#[test]
fn challenge_serialization_keeps_badge_shape() {
    let challenge = Challenge::new(NewChallenge::titled("Plank", 30), Utc::now());

    let json = serde_json::to_value(&challenge).unwrap();
    assert_eq!(json["status"], "available");
    assert_eq!(json["icon"], "fas fa-trophy");
    assert!(json["startDate"].is_null());
    assert!(json["endDate"].is_null());
    let badges = json["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 3);
    assert_eq!(badges[1]["name"], "Halfway");
    assert_eq!(badges[1]["icon"], "fas fa-star-half-alt");
    assert!(badges[1].get("earnedAt").is_none());
}

#[test]
fn out_of_domain_enum_values_fail_to_deserialize() {
    let err = serde_json::from_value::<NewTask>(serde_json::json!({
        "title": "x",
        "status": "archived"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("archived"), "unexpected error: {err}");
}
