// ABOUTME: Configuration module for planner thresholds and AI generation settings
// ABOUTME: Re-exports the intelligence crate's planner config alongside environment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for fitplan
//!
//! - **Environment**: AI plan source settings read from environment variables
//! - **Planner**: Rule thresholds from `fitplan-intelligence`, with `FITPLAN_*` overrides

/// Environment configuration for the AI plan source
pub mod environment;

pub use environment::PlanGenerationConfig;
pub use fitplan_intelligence::config::{
    ConfigError, OverloadConfig, PlannerConfig, RecoveryConfig, TemplateConfig,
    TrainingDaysConfig,
};
