// ABOUTME: Repository wrapper that injects storage failures into an in-memory store
// ABOUTME: Used to check per-exercise lookup isolation and swallowed recovery failures

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use async_trait::async_trait;
use fitplan::database::{
    DailyLogRepository, ExerciseLogRepository, InMemoryDatabase, ProfileRepository,
    WorkoutPlanRepository,
};
use fitplan::errors::{AppError, AppResult};
use fitplan::models::{DailyLog, ExerciseLog, Profile, StoredPlan, WorkoutPlan};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Delegates to an [`InMemoryDatabase`] except where told to fail
#[derive(Default)]
pub struct FlakyDatabase {
    inner: Arc<InMemoryDatabase>,
    /// `get_recent_logs` fails for this exercise name
    failing_exercise: Option<String>,
    /// `get_recent_daily_logs` always fails
    fail_daily_logs: bool,
    /// `save` always fails
    fail_saves: bool,
    recent_log_lookups: AtomicUsize,
}

impl FlakyDatabase {
    #[must_use]
    pub fn wrapping(inner: Arc<InMemoryDatabase>) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_exercise(mut self, name: &str) -> Self {
        self.failing_exercise = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn failing_daily_logs(mut self) -> Self {
        self.fail_daily_logs = true;
        self
    }

    #[must_use]
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    #[must_use]
    pub fn recent_log_lookups(&self) -> usize {
        self.recent_log_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for FlakyDatabase {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.inner.get_profile(user_id).await
    }
}

#[async_trait]
impl ExerciseLogRepository for FlakyDatabase {
    async fn get_recent_logs(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        limit: usize,
    ) -> AppResult<Vec<ExerciseLog>> {
        self.recent_log_lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing_exercise.as_deref() == Some(exercise_name) {
            return Err(AppError::storage(format!("log lookup for {exercise_name} failed")));
        }
        self.inner
            .get_recent_logs(user_id, exercise_name, limit)
            .await
    }

    async fn get_week_logs(&self, user_id: Uuid, week_number: u32) -> AppResult<Vec<ExerciseLog>> {
        self.inner.get_week_logs(user_id, week_number).await
    }
}

#[async_trait]
impl DailyLogRepository for FlakyDatabase {
    async fn get_recent_daily_logs(
        &self,
        user_id: Uuid,
        window: usize,
    ) -> AppResult<Vec<DailyLog>> {
        if self.fail_daily_logs {
            return Err(AppError::storage("daily log store offline"));
        }
        self.inner.get_recent_daily_logs(user_id, window).await
    }
}

#[async_trait]
impl WorkoutPlanRepository for FlakyDatabase {
    async fn save(&self, plan: WorkoutPlan) -> AppResult<StoredPlan> {
        if self.fail_saves {
            return Err(AppError::storage("plan store offline"));
        }
        self.inner.save(plan).await
    }

    async fn find_latest(&self, user_id: Uuid) -> AppResult<Option<StoredPlan>> {
        self.inner.find_latest(user_id).await
    }

    async fn find_by_week(
        &self,
        user_id: Uuid,
        week_number: u32,
    ) -> AppResult<Option<StoredPlan>> {
        self.inner.find_by_week(user_id, week_number).await
    }

    async fn find_all(&self, user_id: Uuid) -> AppResult<Vec<StoredPlan>> {
        self.inner.find_all(user_id).await
    }
}
