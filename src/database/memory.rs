// ABOUTME: In-memory database implementing every repository trait behind a tokio RwLock
// ABOUTME: Enforces one plan per user and week, assigns log ids, and loads JSON seed files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    DailyLogRepository, ExerciseLogRepository, ProfileRepository, SeedData, WorkoutPlanRepository,
};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fitplan_core::models::{DailyLog, ExerciseLog, Profile, StoredPlan, WorkoutPlan};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    profiles: HashMap<Uuid, Profile>,
    exercise_logs: Vec<ExerciseLog>,
    next_log_id: u64,
    daily_logs: BTreeMap<(Uuid, NaiveDate), DailyLog>,
    plans: BTreeMap<(Uuid, u32), StoredPlan>,
}

/// Shared in-memory store
///
/// Cloning is cheap; clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDatabase {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from seed data
    ///
    /// # Errors
    ///
    /// Returns an error if a profile is invalid or the seed holds duplicate
    /// daily logs or plans
    pub async fn from_seed(seed: SeedData) -> AppResult<Self> {
        let db = Self::new();
        for profile in seed.profiles {
            db.insert_profile(profile).await?;
        }
        for log in seed.exercise_logs {
            db.insert_exercise_log(log).await;
        }
        for log in seed.daily_logs {
            db.insert_daily_log(log).await?;
        }
        for plan in seed.plans {
            db.save(plan).await?;
        }
        Ok(db)
    }

    /// Load seed data from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, `InvalidFormat` if
    /// it is not a valid seed document, or any error from [`Self::from_seed`]
    pub async fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read seed file {}", path.display())).with_source(e)
        })?;
        let seed: SeedData = serde_json::from_str(&raw).map_err(|e| {
            AppError::invalid_format(format!("Seed file {} is invalid: {e}", path.display()))
        })?;
        info!(
            path = %path.display(),
            profiles = seed.profiles.len(),
            exercise_logs = seed.exercise_logs.len(),
            daily_logs = seed.daily_logs.len(),
            plans = seed.plans.len(),
            "Loaded seed data"
        );
        Self::from_seed(seed).await
    }

    /// Copy of everything in the store, in seed-file form
    ///
    /// Profiles are ordered by user id; plans by user then week.
    pub async fn snapshot(&self) -> SeedData {
        let store = self.store.read().await;
        let mut profiles: Vec<Profile> = store.profiles.values().cloned().collect();
        profiles.sort_by_key(|profile| profile.user_id);
        SeedData {
            profiles,
            exercise_logs: store.exercise_logs.clone(),
            daily_logs: store.daily_logs.values().cloned().collect(),
            plans: store
                .plans
                .values()
                .map(|stored| stored.plan.clone())
                .collect(),
        }
    }

    /// Write the current contents to a JSON seed file
    ///
    /// Plan ids and timestamps are not kept; they are assigned again on load.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written
    pub async fn write_seed_file(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let seed = self.snapshot().await;
        let raw = serde_json::to_string_pretty(&seed).map_err(|e| {
            AppError::storage(format!("Failed to encode seed data: {e}")).with_source(e)
        })?;
        fs::write(path, raw).await.map_err(|e| {
            AppError::storage(format!("Failed to write seed file {}", path.display()))
                .with_source(e)
        })?;
        info!(
            path = %path.display(),
            plans = seed.plans.len(),
            "Wrote seed data"
        );
        Ok(())
    }

    /// Insert or replace a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile fails validation
    pub async fn insert_profile(&self, profile: Profile) -> AppResult<()> {
        profile.validate()?;
        self.store
            .write()
            .await
            .profiles
            .insert(profile.user_id, profile);
        Ok(())
    }

    /// Append an exercise log, assigning the next id
    pub async fn insert_exercise_log(&self, mut log: ExerciseLog) -> ExerciseLog {
        let mut store = self.store.write().await;
        store.next_log_id += 1;
        log.id = store.next_log_id;
        store.exercise_logs.push(log.clone());
        drop(store);
        log
    }

    /// Insert a daily log
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the user already logged that date
    pub async fn insert_daily_log(&self, log: DailyLog) -> AppResult<()> {
        let key = (log.user_id, log.date);
        let mut store = self.store.write().await;
        if store.daily_logs.contains_key(&key) {
            return Err(AppError::already_exists(format!("Daily log for {}", log.date))
                .with_user_id(log.user_id));
        }
        store.daily_logs.insert(key, log);
        drop(store);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryDatabase {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.store.read().await.profiles.get(&user_id).cloned())
    }
}

#[async_trait]
impl ExerciseLogRepository for InMemoryDatabase {
    async fn get_recent_logs(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        limit: usize,
    ) -> AppResult<Vec<ExerciseLog>> {
        let mut logs: Vec<ExerciseLog> = self
            .store
            .read()
            .await
            .exercise_logs
            .iter()
            .filter(|log| log.user_id == user_id && log.exercise_name == exercise_name)
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        logs.truncate(limit);
        Ok(logs)
    }

    async fn get_week_logs(&self, user_id: Uuid, week_number: u32) -> AppResult<Vec<ExerciseLog>> {
        Ok(self
            .store
            .read()
            .await
            .exercise_logs
            .iter()
            .filter(|log| log.user_id == user_id && log.week_number == week_number)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DailyLogRepository for InMemoryDatabase {
    async fn get_recent_daily_logs(
        &self,
        user_id: Uuid,
        window: usize,
    ) -> AppResult<Vec<DailyLog>> {
        Ok(self
            .store
            .read()
            .await
            .daily_logs
            .range((user_id, NaiveDate::MIN)..=(user_id, NaiveDate::MAX))
            .rev()
            .take(window)
            .map(|(_, log)| log.clone())
            .collect())
    }
}

#[async_trait]
impl WorkoutPlanRepository for InMemoryDatabase {
    async fn save(&self, plan: WorkoutPlan) -> AppResult<StoredPlan> {
        let key = (plan.user_id, plan.week_number);
        let mut store = self.store.write().await;
        if store.plans.contains_key(&key) {
            return Err(
                AppError::already_exists(format!("Workout plan for week {}", plan.week_number))
                    .with_user_id(plan.user_id)
                    .with_week(plan.week_number),
            );
        }
        let stored = StoredPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            plan,
        };
        store.plans.insert(key, stored.clone());
        drop(store);
        debug!(plan_id = %stored.id, week = stored.plan.week_number, "Stored workout plan");
        Ok(stored)
    }

    async fn find_latest(&self, user_id: Uuid) -> AppResult<Option<StoredPlan>> {
        Ok(self
            .store
            .read()
            .await
            .plans
            .range((user_id, 0)..=(user_id, u32::MAX))
            .next_back()
            .map(|(_, plan)| plan.clone()))
    }

    async fn find_by_week(
        &self,
        user_id: Uuid,
        week_number: u32,
    ) -> AppResult<Option<StoredPlan>> {
        Ok(self
            .store
            .read()
            .await
            .plans
            .get(&(user_id, week_number))
            .cloned())
    }

    async fn find_all(&self, user_id: Uuid) -> AppResult<Vec<StoredPlan>> {
        Ok(self
            .store
            .read()
            .await
            .plans
            .range((user_id, 0)..=(user_id, u32::MAX))
            .map(|(_, plan)| plan.clone())
            .collect())
    }
}
