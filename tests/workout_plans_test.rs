// ABOUTME: End-to-end tests for the workout plan service over the in-memory store
// ABOUTME: Week 1 and week 2 generation, progressive overload, persistence rules, and adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{beginner_weight_loss, database_with_profile, exercise_log, profile, service};
use fitplan::database::{InMemoryDatabase, WorkoutPlanRepository};
use fitplan::errors::ErrorCode;
use fitplan::models::{
    ActivityLevel, CompletionStatus, Difficulty, ExerciseEntry, ExperienceLevel, FatigueStatus,
    Goal, IntensityLevel, NoteKind, Reps, WorkoutPlan,
};
use fitplan::services::{PlanRepositories, WorkoutPlanService};
use fitplan_core::constants::messages::PROGRESSION_APPLIED;
use fitplan_intelligence::PlannerConfig;
use helpers::failing_repositories::FlakyDatabase;
use std::sync::Arc;
use uuid::Uuid;

fn entries_named<'a>(plan: &'a WorkoutPlan, name: &'a str) -> Vec<&'a ExerciseEntry> {
    plan.workouts
        .iter()
        .flat_map(|day| day.exercises.iter())
        .filter(|entry| entry.name == name)
        .collect()
}

async fn log_twice(
    db: &InMemoryDatabase,
    user_id: Uuid,
    name: &str,
    difficulty: Difficulty,
) {
    for hour in 0..2 {
        db.insert_exercise_log(exercise_log(
            user_id,
            name,
            1,
            CompletionStatus::Completed,
            difficulty,
            hour,
        ))
        .await;
    }
}

#[tokio::test]
async fn test_week_one_then_week_two_with_overload() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    let week1 = service.generate_next_plan(user_id).await.unwrap();
    assert_eq!(week1.plan.week_number, 1);
    assert_eq!(week1.plan.workouts.len(), 7);
    assert_eq!(week1.plan.rest_day_count(), 3);
    assert_eq!(week1.plan.fatigue_status, FatigueStatus::Normal);
    assert_eq!(week1.plan.goal, Goal::WeightLoss);
    assert!(week1
        .plan
        .workouts
        .iter()
        .flat_map(|day| day.exercises.iter())
        .all(|entry| entry.annotations.is_empty()));

    let day_one = &week1.plan.workouts[0].exercises;
    let easy = day_one[0].name.clone();
    let on_target = day_one[1].name.clone();
    let hard = day_one[2].name.clone();
    assert_eq!(day_one[1].reps, Reps::Range { min: 12, max: 15 });

    log_twice(&db, user_id, &easy, Difficulty::TooEasy).await;
    log_twice(&db, user_id, &on_target, Difficulty::JustRight).await;
    log_twice(&db, user_id, &hard, Difficulty::TooHard).await;

    let week2 = service.generate_next_plan(user_id).await.unwrap();
    assert_eq!(week2.plan.week_number, 2);
    assert_eq!(week2.plan.rest_day_count(), 3);

    for entry in entries_named(&week2.plan, &easy) {
        assert_eq!(entry.intensity_level, IntensityLevel::High);
        assert!(entry.has_note(NoteKind::IncreaseWeight));
    }
    for entry in entries_named(&week2.plan, &on_target) {
        assert_eq!(entry.reps.to_string(), "14-17");
        assert!(entry.has_note(NoteKind::IncreaseReps));
    }
    for entry in entries_named(&week2.plan, &hard) {
        assert_eq!(entry.intensity_level, IntensityLevel::Light);
        assert!(entry.has_note(NoteKind::ReduceIntensity));
    }
    let untouched: Vec<&ExerciseEntry> = week2
        .plan
        .workouts
        .iter()
        .flat_map(|day| day.exercises.iter())
        .filter(|entry| ![&easy, &on_target, &hard].contains(&&entry.name))
        .collect();
    assert!(!untouched.is_empty());
    assert!(untouched.iter().all(|entry| entry.annotations.is_empty()));
    assert_eq!(
        week2.plan.narrative.progression_notes.as_deref(),
        Some(PROGRESSION_APPLIED)
    );

    let weeks: Vec<u32> = service
        .all_plans(user_id)
        .await
        .unwrap()
        .iter()
        .map(|stored| stored.plan.week_number)
        .collect();
    assert_eq!(weeks, vec![1, 2]);
}

#[tokio::test]
async fn test_week_two_without_logs_skips_overload() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    service.generate_plan(user_id, 1).await.unwrap();
    let week2 = service.generate_plan(user_id, 2).await.unwrap();
    assert!(week2.plan.narrative.progression_notes.is_none());
    assert!(week2
        .plan
        .workouts
        .iter()
        .flat_map(|day| day.exercises.iter())
        .all(|entry| entry.annotations.is_empty()));
}

#[tokio::test]
async fn test_failed_lookup_leaves_only_that_exercise_untouched() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;

    let week1 = service(&db, None).generate_plan(user_id, 1).await.unwrap();
    let day_one = &week1.plan.workouts[0].exercises;
    let broken = day_one[0].name.clone();
    let healthy = day_one[1].name.clone();
    log_twice(&db, user_id, &broken, Difficulty::TooEasy).await;
    log_twice(&db, user_id, &healthy, Difficulty::TooEasy).await;

    let flaky = Arc::new(FlakyDatabase::wrapping(db).failing_exercise(&broken));
    let service = WorkoutPlanService::with_config(
        PlanRepositories::shared(flaky.clone()),
        None,
        &PlannerConfig::default(),
    );
    let week2 = service.generate_plan(user_id, 2).await.unwrap();

    assert!(flaky.recent_log_lookups() > 2);
    assert!(entries_named(&week2.plan, &broken)
        .iter()
        .all(|entry| entry.annotations.is_empty()));
    assert!(entries_named(&week2.plan, &healthy)
        .iter()
        .all(|entry| entry.has_note(NoteKind::IncreaseWeight)));
}

#[tokio::test]
async fn test_duplicate_week_is_rejected_and_not_overwritten() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    let first = service.generate_plan(user_id, 1).await.unwrap();
    let error = service.generate_plan(user_id, 1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(service.plan_by_week(user_id, 1).await.unwrap().id, first.id);
}

#[tokio::test]
async fn test_save_failure_surfaces() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let flaky = Arc::new(FlakyDatabase::wrapping(db.clone()).failing_saves());
    let service = WorkoutPlanService::with_config(
        PlanRepositories::shared(flaky),
        None,
        &PlannerConfig::default(),
    );

    let error = service.generate_plan(user_id, 1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(db.find_all(user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_input_errors() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    let missing = service.generate_plan(Uuid::new_v4(), 1).await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);

    let week_zero = service.generate_plan(user_id, 0).await.unwrap_err();
    assert_eq!(week_zero.code, ErrorCode::InvalidInput);

    let absent = service.plan_by_week(user_id, 3).await.unwrap_err();
    assert_eq!(absent.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_latest_plan_generates_first_week() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    let current = service.latest_plan(user_id).await.unwrap();
    assert_eq!(current.plan.week_number, 1);
    assert_eq!(service.all_plans(user_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sedentary_request_is_capped() {
    let sedentary = profile(
        Goal::Maintenance,
        ExperienceLevel::Intermediate,
        ActivityLevel::Sedentary,
        5,
    );
    let user_id = sedentary.user_id;
    let db = database_with_profile(sedentary).await;

    let plan = service(&db, None).generate_plan(user_id, 1).await.unwrap();
    assert_eq!(plan.plan.training_day_count(), 3);
    assert_eq!(plan.plan.rest_day_count(), 4);
}

#[tokio::test]
async fn test_weekly_adherence_scores() {
    let profile = beginner_weight_loss();
    let user_id = profile.user_id;
    let db = database_with_profile(profile).await;
    let service = service(&db, None);

    assert_eq!(service.weekly_adherence(user_id, 1).await.unwrap(), 0);

    for (status, hour) in [
        (CompletionStatus::Completed, 0),
        (CompletionStatus::Completed, 1),
        (CompletionStatus::Partial, 2),
    ] {
        db.insert_exercise_log(exercise_log(
            user_id,
            "Plank",
            1,
            status,
            Difficulty::JustRight,
            hour,
        ))
        .await;
    }
    assert_eq!(service.weekly_adherence(user_id, 1).await.unwrap(), 83);

    db.insert_exercise_log(exercise_log(
        user_id,
        "Plank",
        1,
        CompletionStatus::Skipped,
        Difficulty::JustRight,
        3,
    ))
    .await;
    assert_eq!(service.weekly_adherence(user_id, 1).await.unwrap(), 63);
}
