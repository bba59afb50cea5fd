// ABOUTME: Shared constants for the training planner
// ABOUTME: Week layout, day names, and narrative strings used by generators and adjusters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values shared between the intelligence crate and the service layer.

/// Week layout
pub mod week {
    /// Number of day entries in every weekly plan
    pub const DAYS_PER_WEEK: usize = 7;

    /// Default requested training days when a profile does not state one
    pub const DEFAULT_TRAINING_DAYS: u8 = 4;

    /// Calendar day names, index 0 = day 1
    pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Day type label used for rest days
    pub const REST_DAY_TYPE: &str = "Rest & Recovery";

    /// Day type label used for a training day converted to active recovery
    pub const ACTIVE_RECOVERY_TYPE: &str = "Active Recovery";

    /// Day name for a 1-based day index (falls back to a generic label)
    #[must_use]
    pub fn day_name(day: u8) -> String {
        usize::from(day)
            .checked_sub(1)
            .and_then(|index| DAY_NAMES.get(index))
            .map_or_else(|| format!("Day {day}"), |name| (*name).to_owned())
    }
}

/// Narrative strings attached to plans
pub mod messages {
    /// Progression note added when overload adjustments were evaluated
    pub const PROGRESSION_APPLIED: &str =
        "Progressive overload applied based on your previous week's performance. Keep pushing!";

    /// Recovery tip for a lightly adjusted plan
    pub const RECOVERY_LIGHT: &str =
        "You reported some fatigue. Intensity has been lowered one step today; prioritise sleep and hydration.";

    /// Recovery tip for a reduced plan
    pub const RECOVERY_REDUCED: &str =
        "Recent logs show a fatigue pattern. Volume and intensity are reduced this week and one session is now active recovery. Aim for 7-9 hours of sleep.";
}

/// Units used in annotations
pub mod units {
    /// Kilogram suffix used in weight annotations
    pub const KG: &str = "kg";
}
