// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, profile and log fixtures, and service construction over the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fitplan::database::InMemoryDatabase;
use fitplan::models::{
    ActivityLevel, CompletionStatus, DailyLog, DietAdherence, Difficulty, EnergyLevel,
    ExerciseLog, ExperienceLevel, Goal, Mood, Profile, SetDetail,
};
use fitplan::plan_sources::PlanSource;
use fitplan::services::{PlanRepositories, WorkoutPlanService};
use fitplan_intelligence::PlannerConfig;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with no limitations
pub fn profile(
    goal: Goal,
    experience_level: ExperienceLevel,
    activity_level: ActivityLevel,
    available_days_per_week: u8,
) -> Profile {
    Profile {
        user_id: Uuid::new_v4(),
        goal,
        experience_level,
        activity_level,
        available_days_per_week,
        injuries_limitations: String::new(),
    }
}

/// The reference user: beginner, weight loss, moderately active, four days
pub fn beginner_weight_loss() -> Profile {
    profile(
        Goal::WeightLoss,
        ExperienceLevel::Beginner,
        ActivityLevel::Moderate,
        4,
    )
}

/// Fixed point in time so log ordering is deterministic
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 18, 0, 0).unwrap()
}

/// Three-set exercise log with every set rated the same
pub fn exercise_log(
    user_id: Uuid,
    exercise_name: &str,
    week_number: u32,
    completion_status: CompletionStatus,
    difficulty: Difficulty,
    hours_after_base: i64,
) -> ExerciseLog {
    let sets_completed = match completion_status {
        CompletionStatus::Completed => 3,
        CompletionStatus::Partial => 2,
        CompletionStatus::Skipped => 0,
    };
    ExerciseLog {
        id: 0,
        user_id,
        exercise_name: exercise_name.to_owned(),
        week_number,
        day_number: 1,
        completion_status,
        sets_completed,
        sets_planned: 3,
        set_details: (1..=sets_completed)
            .map(|set_number| SetDetail {
                set_number,
                reps: 10,
                weight_kg: Some(20.0),
                difficulty,
            })
            .collect(),
        created_at: base_time() + Duration::hours(hours_after_base),
    }
}

/// Daily log for `days_after_base` days after 2025-03-03
pub fn daily_log(
    user_id: Uuid,
    days_after_base: i64,
    energy_level: EnergyLevel,
    sleep_hours: f64,
) -> DailyLog {
    DailyLog {
        user_id,
        date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap() + Duration::days(days_after_base),
        energy_level,
        mood: Mood::Good,
        sleep_hours,
        workout_status: CompletionStatus::Completed,
        diet_adherence: DietAdherence::Followed,
        notes: String::new(),
    }
}

/// Empty store holding one profile
pub async fn database_with_profile(profile: Profile) -> Arc<InMemoryDatabase> {
    init_test_logging();
    let db = InMemoryDatabase::new();
    db.insert_profile(profile).await.unwrap();
    Arc::new(db)
}

/// Service over `db` with default planner configuration
pub fn service(
    db: &Arc<InMemoryDatabase>,
    primary: Option<Arc<dyn PlanSource>>,
) -> WorkoutPlanService {
    WorkoutPlanService::with_config(
        PlanRepositories::shared(db.clone()),
        primary,
        &PlannerConfig::default(),
    )
}
