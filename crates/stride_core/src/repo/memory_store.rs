//! In-memory record store.
//!
//! # Responsibility
//! - Hold one keyed collection per entity kind for the process lifetime.
//! - Assign IDs and creation timestamps, apply create defaults and update
//!   derived-field rules.
//!
//! # Invariants
//! - Each collection has its own mutex; every operation holds it for its
//!   whole read-merge-write.
//! - IDs are unique within a collection and never reused.
//! - A fresh store (`MemoryStore::new`) always contains the seed
//!   achievements.

use crate::model::achievement::{Achievement, AchievementPatch, NewAchievement};
use crate::model::challenge::{Challenge, ChallengePatch, NewChallenge};
use crate::model::habit::{Habit, HabitPatch, NewHabit};
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::model::{Record, RecordId};
use crate::repo::record_repo::{
    AchievementRepository, ChallengeRepository, HabitRepository, RepoError, RepoResult,
    TaskRepository,
};
use crate::seed::starter_achievements;
use chrono::Utc;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Process-local store for every tracker entity.
pub struct MemoryStore {
    tasks: Collection<Task>,
    habits: Collection<Habit>,
    challenges: Collection<Challenge>,
    achievements: Collection<Achievement>,
}

impl MemoryStore {
    /// Creates a store seeded with the starter achievements.
    pub fn new() -> Self {
        let seed = starter_achievements(Utc::now());
        info!(
            "event=store_init module=repo status=ok seeded_achievements={}",
            seed.len()
        );
        Self {
            achievements: Collection::with_records(seed),
            ..Self::empty()
        }
    }

    /// Creates a store with every collection empty, including achievements.
    pub fn empty() -> Self {
        Self {
            tasks: Collection::new(),
            habits: Collection::new(),
            challenges: Collection::new(),
            achievements: Collection::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

struct Entry<T> {
    /// Insertion sequence; breaks `created_at` ties and orders achievements.
    seq: u64,
    record: T,
}

struct CollectionState<T> {
    records: HashMap<RecordId, Entry<T>>,
    next_seq: u64,
}

impl<T: Record> CollectionState<T> {
    fn fresh_id(&self) -> RecordId {
        loop {
            let id = Uuid::new_v4();
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    fn push(&mut self, record: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.insert(record.id(), Entry { seq, record });
    }

    fn sorted_entries(&self) -> Vec<&Entry<T>> {
        let mut entries: Vec<&Entry<T>> = self.records.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries
    }
}

struct Collection<T> {
    state: Mutex<CollectionState<T>>,
}

impl<T: Record> Collection<T> {
    fn new() -> Self {
        Self::with_records(Vec::new())
    }

    fn with_records(records: Vec<T>) -> Self {
        let mut state = CollectionState {
            records: HashMap::with_capacity(records.len()),
            next_seq: 0,
        };
        for record in records {
            state.push(record);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, CollectionState<T>>> {
        self.state
            .lock()
            .map_err(|_| RepoError::LockPoisoned(T::KIND))
    }

    /// Builds a record under the collection guard with a fresh unused ID.
    fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> RepoResult<T> {
        let mut state = self.lock()?;
        let record = build(state.fresh_id());
        state.push(record.clone());
        debug!(
            "event=record_create module=repo status=ok kind={} id={}",
            T::KIND,
            record.id()
        );
        Ok(record)
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<T>> {
        let state = self.lock()?;
        Ok(state.records.get(&id).map(|entry| entry.record.clone()))
    }

    fn modify(&self, id: RecordId, apply: impl FnOnce(&mut T)) -> RepoResult<Option<T>> {
        let mut state = self.lock()?;
        let Some(entry) = state.records.get_mut(&id) else {
            debug!(
                "event=record_update module=repo status=not_found kind={} id={id}",
                T::KIND
            );
            return Ok(None);
        };
        apply(&mut entry.record);
        debug!(
            "event=record_update module=repo status=ok kind={} id={id}",
            T::KIND
        );
        Ok(Some(entry.record.clone()))
    }

    fn remove(&self, id: RecordId) -> RepoResult<bool> {
        let mut state = self.lock()?;
        let removed = state.records.remove(&id).is_some();
        debug!(
            "event=record_delete module=repo status={} kind={} id={id}",
            if removed { "ok" } else { "not_found" },
            T::KIND
        );
        Ok(removed)
    }

    fn in_insertion_order(&self) -> RepoResult<Vec<T>> {
        let state = self.lock()?;
        Ok(state
            .sorted_entries()
            .into_iter()
            .map(|entry| entry.record.clone())
            .collect())
    }

    /// Newest `created_at` first; equal timestamps fall back to newest insert.
    fn newest_first(&self) -> RepoResult<Vec<T>> {
        let state = self.lock()?;
        let mut entries = state.sorted_entries();
        entries.sort_by(|a, b| {
            b.record
                .created_at()
                .cmp(&a.record.created_at())
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries
            .into_iter()
            .map(|entry| entry.record.clone())
            .collect())
    }
}

impl TaskRepository for MemoryStore {
    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.tasks.newest_first()
    }

    fn get_task(&self, id: RecordId) -> RepoResult<Option<Task>> {
        self.tasks.get(id)
    }

    fn create_task(&self, input: NewTask) -> RepoResult<Task> {
        let now = Utc::now();
        self.tasks.insert_with(|id| Task::with_id(id, input, now))
    }

    fn update_task(&self, id: RecordId, patch: TaskPatch) -> RepoResult<Option<Task>> {
        let now = Utc::now();
        self.tasks.modify(id, |task| task.apply_patch(patch, now))
    }

    fn delete_task(&self, id: RecordId) -> RepoResult<bool> {
        self.tasks.remove(id)
    }
}

impl HabitRepository for MemoryStore {
    fn list_habits(&self) -> RepoResult<Vec<Habit>> {
        self.habits.newest_first()
    }

    fn get_habit(&self, id: RecordId) -> RepoResult<Option<Habit>> {
        self.habits.get(id)
    }

    fn create_habit(&self, input: NewHabit) -> RepoResult<Habit> {
        let now = Utc::now();
        self.habits.insert_with(|id| Habit::with_id(id, input, now))
    }

    fn update_habit(&self, id: RecordId, patch: HabitPatch) -> RepoResult<Option<Habit>> {
        self.habits.modify(id, |habit| habit.apply_patch(patch))
    }

    fn delete_habit(&self, id: RecordId) -> RepoResult<bool> {
        self.habits.remove(id)
    }
}

impl ChallengeRepository for MemoryStore {
    fn list_challenges(&self) -> RepoResult<Vec<Challenge>> {
        self.challenges.newest_first()
    }

    fn get_challenge(&self, id: RecordId) -> RepoResult<Option<Challenge>> {
        self.challenges.get(id)
    }

    fn create_challenge(&self, input: NewChallenge) -> RepoResult<Challenge> {
        let now = Utc::now();
        self.challenges
            .insert_with(|id| Challenge::with_id(id, input, now))
    }

    fn update_challenge(
        &self,
        id: RecordId,
        patch: ChallengePatch,
    ) -> RepoResult<Option<Challenge>> {
        self.challenges
            .modify(id, |challenge| challenge.apply_patch(patch))
    }

    fn delete_challenge(&self, id: RecordId) -> RepoResult<bool> {
        self.challenges.remove(id)
    }
}

impl AchievementRepository for MemoryStore {
    fn list_achievements(&self) -> RepoResult<Vec<Achievement>> {
        self.achievements.in_insertion_order()
    }

    fn get_achievement(&self, id: RecordId) -> RepoResult<Option<Achievement>> {
        self.achievements.get(id)
    }

    fn create_achievement(&self, input: NewAchievement) -> RepoResult<Achievement> {
        let now = Utc::now();
        self.achievements
            .insert_with(|id| Achievement::with_id(id, input, now))
    }

    fn update_achievement(
        &self,
        id: RecordId,
        patch: AchievementPatch,
    ) -> RepoResult<Option<Achievement>> {
        let now = Utc::now();
        self.achievements
            .modify(id, |achievement| achievement.apply_patch(patch, now))
    }
}
