// ABOUTME: Tests for loading the in-memory database from a JSON seed file
// ABOUTME: Label spellings, id assignment, duplicate detection, and unreadable files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use fitplan::database::{
    DailyLogRepository, ExerciseLogRepository, InMemoryDatabase, ProfileRepository,
    WorkoutPlanRepository,
};
use fitplan::services::{PlanRepositories, WorkoutPlanService};
use fitplan::errors::ErrorCode;
use fitplan::models::{ActivityLevel, EnergyLevel, Goal};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

const USER: &str = "6f1c2a52-5d0e-4f55-9a3e-0d4b1f0c7e21";

fn seed_document() -> serde_json::Value {
    json!({
        "profiles": [{
            "user_id": USER,
            "goal": "Weight Loss",
            "experience_level": "Beginner",
            "activity_level": "Very Active",
            "available_days_per_week": 4,
            "injuries_limitations": "old knee injury"
        }],
        "exercise_logs": [
            {
                "user_id": USER,
                "exercise_name": "Goblet Squat",
                "week_number": 1,
                "completion_status": "Completed",
                "sets_completed": 3,
                "sets_planned": 3,
                "set_details": [{ "set_number": 1, "reps": 12, "difficulty": "Too Easy" }],
                "created_at": "2025-03-03T18:00:00Z"
            },
            {
                "user_id": USER,
                "exercise_name": "Goblet Squat",
                "week_number": 1,
                "completion_status": "Partial",
                "sets_completed": 2,
                "sets_planned": 3,
                "created_at": "2025-03-05T18:00:00Z"
            }
        ],
        "daily_logs": [
            { "user_id": USER, "date": "2025-03-04", "energy_level": "Slightly Fatigued", "sleep_hours": 5.5 },
            { "user_id": USER, "date": "2025-03-05", "energy_level": "Energized" }
        ]
    })
}

fn write_seed(dir: &TempDir, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("seed.json");
    fs::write(&path, value.to_string()).unwrap();
    path
}

#[tokio::test]
async fn test_seed_file_loads_every_collection() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_seed(&dir, &seed_document());
    let user_id = Uuid::parse_str(USER).unwrap();

    let db = InMemoryDatabase::from_seed_file(&path).await.unwrap();

    let profile = db.get_profile(user_id).await.unwrap().unwrap();
    assert_eq!(profile.goal, Goal::WeightLoss);
    assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
    assert!(profile.has_limitations());

    let logs = db.get_recent_logs(user_id, "Goblet Squat", 5).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, 2);
    assert_eq!(logs[1].id, 1);
    assert_eq!(logs[1].set_details.len(), 1);

    let daily = db.get_recent_daily_logs(user_id, 7).await.unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].energy_level, EnergyLevel::Energized);
    assert!(daily[0].sleep_hours.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_duplicate_daily_log_in_seed_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut seed = seed_document();
    let first = seed["daily_logs"][0].clone();
    seed["daily_logs"].as_array_mut().unwrap().push(first);
    let path = write_seed(&dir, &seed);

    let error = InMemoryDatabase::from_seed_file(&path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_invalid_profile_in_seed_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut seed = seed_document();
    seed["profiles"][0]["available_days_per_week"] = json!(9);
    let path = write_seed(&dir, &seed);

    let error = InMemoryDatabase::from_seed_file(&path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_unreadable_and_malformed_files() {
    let dir = TempDir::new().unwrap();

    let missing = InMemoryDatabase::from_seed_file(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::StorageError);

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let malformed = InMemoryDatabase::from_seed_file(&path).await.unwrap_err();
    assert_eq!(malformed.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_generated_plan_survives_write_back() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_seed(&dir, &seed_document());
    let user_id = Uuid::parse_str(USER).unwrap();

    let db = Arc::new(InMemoryDatabase::from_seed_file(&path).await.unwrap());
    let service = WorkoutPlanService::new(PlanRepositories::shared(db.clone()), None);
    let generated = service.generate_next_plan(user_id).await.unwrap();
    assert_eq!(generated.plan.week_number, 1);
    db.write_seed_file(&path).await.unwrap();

    let reloaded = InMemoryDatabase::from_seed_file(&path).await.unwrap();
    let latest = reloaded.find_latest(user_id).await.unwrap().unwrap();
    assert_eq!(latest.plan, generated.plan);
    assert_eq!(
        reloaded.get_recent_logs(user_id, "Goblet Squat", 5).await.unwrap().len(),
        2
    );
    assert_eq!(reloaded.get_recent_daily_logs(user_id, 7).await.unwrap().len(), 2);

    let next = WorkoutPlanService::new(PlanRepositories::shared(Arc::new(reloaded)), None)
        .generate_next_plan(user_id)
        .await
        .unwrap();
    assert_eq!(next.plan.week_number, 2);
}

#[tokio::test]
async fn test_write_to_missing_directory_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let db = InMemoryDatabase::new();
    let error = db
        .write_seed_file(dir.path().join("absent").join("seed.json"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}
