// ABOUTME: Progressive overload configuration
// ABOUTME: History window and load/rep increments used by the overload calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Progressive overload thresholds and increments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverloadConfig {
    /// Most recent logs considered per exercise
    pub history_window: usize,
    /// Logs required before any change is recommended
    pub min_logs_for_progression: usize,
    /// Suggested load increase (kg)
    pub weight_increment_kg: f64,
    /// Suggested load decrease (kg)
    pub weight_decrement_kg: f64,
    /// Reps added to both ends of a range
    pub rep_increment: u32,
}

impl Default for OverloadConfig {
    fn default() -> Self {
        Self {
            history_window: 2,
            min_logs_for_progression: 2,
            weight_increment_kg: 2.5,
            weight_decrement_kg: 2.5,
            rep_increment: 2,
        }
    }
}
