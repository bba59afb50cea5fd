// ABOUTME: Weekly schedule configuration for training-day selection and template prescriptions
// ABOUTME: Activity-level day clamps, sets by experience, reps and rest by goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::week::DEFAULT_TRAINING_DAYS;
use serde::{Deserialize, Serialize};

/// Activity-level adjustments applied to the requested training days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingDaysConfig {
    /// Days used when a profile does not state a preference
    pub default_days: u8,
    /// Upper bound for sedentary users
    pub sedentary_max_days: u8,
    /// Days added for active users below `active_bonus_below`
    pub active_bonus_days: u8,
    /// Active users requesting fewer days than this get the bonus
    pub active_bonus_below: u8,
    /// Cap applied after the active bonus
    pub active_max_days: u8,
}

impl Default for TrainingDaysConfig {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_TRAINING_DAYS,
            sedentary_max_days: 3,
            active_bonus_days: 1,
            active_bonus_below: 5,
            active_max_days: 6,
        }
    }
}

/// Prescription defaults for template-generated exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Working sets for beginners
    pub beginner_sets: u32,
    /// Working sets for intermediates
    pub intermediate_sets: u32,
    /// Working sets for advanced lifters
    pub advanced_sets: u32,
    /// Extra sets on compound lifts for intermediate lifters
    pub compound_extra_sets: u32,
    /// Rep range for muscle gain (min, max)
    pub muscle_gain_reps: (u32, u32),
    /// Rep range for weight loss (min, max)
    pub weight_loss_reps: (u32, u32),
    /// Rep range for maintenance (min, max)
    pub maintenance_reps: (u32, u32),
    /// Rest between sets for muscle gain (seconds)
    pub muscle_gain_rest_seconds: u32,
    /// Rest between sets for weight loss (seconds)
    pub weight_loss_rest_seconds: u32,
    /// Rest between sets for maintenance (seconds)
    pub maintenance_rest_seconds: u32,
    /// Extra rest for sedentary users (seconds)
    pub sedentary_extra_rest_seconds: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            beginner_sets: 3,
            intermediate_sets: 3,
            advanced_sets: 4,
            compound_extra_sets: 1,
            muscle_gain_reps: (8, 12),
            weight_loss_reps: (12, 15),
            maintenance_reps: (10, 12),
            muscle_gain_rest_seconds: 90,
            weight_loss_rest_seconds: 45,
            maintenance_rest_seconds: 60,
            sedentary_extra_rest_seconds: 15,
        }
    }
}
