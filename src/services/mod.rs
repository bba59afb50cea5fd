// ABOUTME: Domain service layer for workout plan synthesis
// ABOUTME: Pure plan assembly plus the orchestrating workout plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are independent of any transport; the CLI and tests drive them
//! through the repository traits and an optional primary plan source.

/// Shape gate and composition of the stored plan
pub mod plan_assembler;

/// Plan generation, retrieval, and recovery orchestration
pub mod workout_plans;

pub use plan_assembler::PlanAssembler;
pub use workout_plans::{PlanRepositories, WorkoutPlanService};
