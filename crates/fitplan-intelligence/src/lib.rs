// ABOUTME: Plan synthesis algorithms for the fitplan training planner
// ABOUTME: Training-day selection, template weeks, progressive overload, recovery, and adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Deterministic rules that turn a profile and training history into a week
//! of workouts. Nothing in this crate performs I/O: callers fetch logs and
//! profiles, pass them in, and persist the results.
//!
//! ## Modules
//!
//! - **config**: Thresholds for every rule, with env overrides
//! - **`training_days`**: Activity-adjusted training day count
//! - **`exercise_catalog`**: Movements, substitution chains, and contraindications
//! - **`template_generator`**: Rule-based week builder
//! - **overload**: Progressive overload decisions
//! - **recovery**: Recovery assessment and plan lightening
//! - **adherence**: Weekly completion score

/// Weekly adherence scoring
pub mod adherence;
/// Planner configuration
pub mod config;
/// Exercise catalog and injury limitations
pub mod exercise_catalog;
/// Progressive overload
pub mod overload;
/// Recovery assessment and adjustment
pub mod recovery;
/// Template week generation
pub mod template_generator;
/// Training-day selection
pub mod training_days;

pub use adherence::weekly_adherence;
pub use config::{ConfigError, PlannerConfig};
pub use exercise_catalog::Limitation;
pub use overload::{OverloadAction, OverloadCalculator, OverloadDecision};
pub use recovery::{
    recommend_for_energy, EnergyRecommendation, IntensityAdjustment, RecoveryAdjuster,
    RecoveryAssessment,
};
pub use template_generator::{TemplateGenerator, TemplateRequest, TemplateWeek};
pub use training_days::TrainingDaySelector;
