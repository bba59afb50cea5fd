// ABOUTME: Domain model re-exports for the training planner
// ABOUTME: Profiles, weekly plans, and exercise/daily logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Profiles and logs are owned by collaborator stores and are read-only here.
//! Plans are produced by the pipeline and handed to the plan store.

/// Exercise and daily logs
pub mod logs;
/// Weekly workout plans
pub mod plan;
/// User profile
pub mod profile;

pub use logs::{
    CompletionStatus, DailyLog, DietAdherence, Difficulty, EnergyLevel, ExerciseLog, Mood,
    SetDetail,
};
pub use plan::{
    validate_week_shape, DayPlan, ExerciseEntry, FatigueStatus, GuidanceNote, IntensityLevel,
    NoteKind, PlanNarrative, Reps, StoredPlan, WorkoutPlan,
};
pub use profile::{ActivityLevel, ExperienceLevel, Goal, Profile};
