// ABOUTME: Main library entry point for the fitplan workout plan synthesis pipeline
// ABOUTME: Wires plan sources, repositories, and services over the core and intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # fitplan
//!
//! Generates one week of personalised workouts per user and week number.
//!
//! ## Pipeline
//!
//! - **Training days**: activity-adjusted count of sessions per week
//! - **Plan sources**: an optional AI source with the rule-based template as fallback
//! - **Progressive overload**: prescription changes driven by recent exercise logs
//! - **Assembly**: single validation gate before the plan is stored
//! - **Recovery**: lightened copy of the current plan when daily logs show fatigue
//!
//! Rule logic lives in `fitplan-intelligence`; shared models and errors live in
//! `fitplan-core`. This crate adds I/O: repositories, the LLM client, and the
//! orchestrating service.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::database::InMemoryDatabase;
//! use fitplan::errors::AppResult;
//! use fitplan::services::{PlanRepositories, WorkoutPlanService};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let db = Arc::new(InMemoryDatabase::from_seed_file("seed.json").await?);
//!     let service = WorkoutPlanService::new(PlanRepositories::shared(db), None);
//!     let plan = service.generate_next_plan(Uuid::nil()).await?;
//!     println!("week {} has {} training days", plan.plan.week_number, plan.plan.training_day_count());
//!     Ok(())
//! }
//! ```

/// Planner thresholds and AI generation settings
pub mod config;

/// Repository traits and the in-memory store
pub mod database;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and the Groq client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Sources of candidate weeks
pub mod plan_sources;

/// Plan assembly and orchestration
pub mod services;

pub use fitplan_core::models;
