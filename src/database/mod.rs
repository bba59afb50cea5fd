// ABOUTME: Repository traits for profiles, logs, and stored workout plans
// ABOUTME: The plan service depends only on these traits; InMemoryDatabase implements all of them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Persistence
//!
//! Profiles and logs are written by collaborators outside the planner and are
//! read-only here. Stored plans are written once per `(user, week)`; the store
//! rejects a second save for the same week.

/// In-memory implementation of every repository trait
pub mod memory;

pub use memory::InMemoryDatabase;

use crate::errors::AppResult;
use async_trait::async_trait;
use fitplan_core::models::{DailyLog, ExerciseLog, Profile, StoredPlan, WorkoutPlan};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read access to user profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Look up a profile
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;
}

/// Read access to exercise performance logs
#[async_trait]
pub trait ExerciseLogRepository: Send + Sync {
    /// Most recent logs for one exercise, newest first (`created_at`, then `id`)
    async fn get_recent_logs(
        &self,
        user_id: Uuid,
        exercise_name: &str,
        limit: usize,
    ) -> AppResult<Vec<ExerciseLog>>;

    /// Every log recorded against a plan week
    async fn get_week_logs(&self, user_id: Uuid, week_number: u32) -> AppResult<Vec<ExerciseLog>>;
}

/// Read access to daily recovery logs
#[async_trait]
pub trait DailyLogRepository: Send + Sync {
    /// Most recent `window` daily logs, newest date first
    async fn get_recent_daily_logs(&self, user_id: Uuid, window: usize)
        -> AppResult<Vec<DailyLog>>;
}

/// Storage for issued workout plans
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    /// Persist a plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when a plan for the same user and week
    /// is already stored
    async fn save(&self, plan: WorkoutPlan) -> AppResult<StoredPlan>;

    /// Plan with the highest week number
    async fn find_latest(&self, user_id: Uuid) -> AppResult<Option<StoredPlan>>;

    /// Plan for one week
    async fn find_by_week(&self, user_id: Uuid, week_number: u32)
        -> AppResult<Option<StoredPlan>>;

    /// Every plan, ascending by week
    async fn find_all(&self, user_id: Uuid) -> AppResult<Vec<StoredPlan>>;
}

/// JSON document used to seed an [`InMemoryDatabase`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    /// User profiles
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Exercise logs; ids are reassigned on load
    #[serde(default)]
    pub exercise_logs: Vec<ExerciseLog>,
    /// Daily recovery logs
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
    /// Previously issued plans
    #[serde(default)]
    pub plans: Vec<WorkoutPlan>,
}
