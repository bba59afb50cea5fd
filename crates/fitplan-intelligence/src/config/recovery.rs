// ABOUTME: Recovery adjustment configuration
// ABOUTME: Daily-log window, low-sleep threshold, majority rule, and session conversion policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Thresholds deciding when a read plan is lightened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Most recent daily logs inspected
    pub window_days: usize,
    /// Sleep below this many hours counts as a low-sleep day (0 = not recorded)
    pub low_sleep_threshold_hours: f64,
    /// Share of inspected days that must be fatigued or short on sleep; strictly exceeded
    pub majority_ratio: f64,
    /// Convert one training day to active recovery when the plan is reduced
    pub convert_training_day: bool,
    /// Training days that must remain before a conversion is allowed
    pub min_training_days_for_conversion: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            low_sleep_threshold_hours: 6.0,
            majority_ratio: 0.5,
            convert_training_day: true,
            min_training_days_for_conversion: 2,
        }
    }
}
