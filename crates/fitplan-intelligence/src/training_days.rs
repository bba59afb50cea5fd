// ABOUTME: Effective weekly training-day selection from requested days and activity level
// ABOUTME: Sedentary users are capped, active users get a bonus day, everyone else is unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::TrainingDaysConfig;
use fitplan_core::models::ActivityLevel;
use tracing::debug;

/// Decides how many days per week a user trains
#[derive(Debug, Clone, Default)]
pub struct TrainingDaySelector {
    config: TrainingDaysConfig,
}

impl TrainingDaySelector {
    /// Create a selector with explicit thresholds
    #[must_use]
    pub const fn new(config: TrainingDaysConfig) -> Self {
        Self { config }
    }

    /// Effective training days for a request
    ///
    /// Sedentary users requesting more than `sedentary_max_days` are capped.
    /// Active users requesting fewer than `active_bonus_below` get
    /// `active_bonus_days` more, capped at `active_max_days`. `None` uses the
    /// configured default.
    #[must_use]
    pub fn select(&self, requested: Option<u8>, activity_level: ActivityLevel) -> u8 {
        let requested = requested.unwrap_or(self.config.default_days);
        let effective = match activity_level {
            ActivityLevel::Sedentary if requested > self.config.sedentary_max_days => {
                self.config.sedentary_max_days
            }
            ActivityLevel::Active if requested < self.config.active_bonus_below => requested
                .saturating_add(self.config.active_bonus_days)
                .min(self.config.active_max_days),
            _ => requested,
        };

        if effective != requested {
            debug!(
                requested,
                effective,
                activity = %activity_level,
                "Adjusted training days for activity level"
            );
        }
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sedentary_capped() {
        let selector = TrainingDaySelector::default();
        assert_eq!(selector.select(Some(5), ActivityLevel::Sedentary), 3);
        assert_eq!(selector.select(Some(2), ActivityLevel::Sedentary), 2);
    }

    #[test]
    fn test_active_bonus_and_cap() {
        let selector = TrainingDaySelector::default();
        assert_eq!(selector.select(Some(3), ActivityLevel::Active), 4);
        assert_eq!(selector.select(Some(4), ActivityLevel::Active), 5);
        assert_eq!(selector.select(Some(6), ActivityLevel::Active), 6);
        assert_eq!(selector.select(Some(7), ActivityLevel::Active), 7);
    }

    #[test]
    fn test_other_levels_identity() {
        let selector = TrainingDaySelector::default();
        for level in [
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::VeryActive,
        ] {
            for days in 1..=7 {
                assert_eq!(selector.select(Some(days), level), days);
            }
        }
    }

    #[test]
    fn test_missing_request_uses_default() {
        let selector = TrainingDaySelector::default();
        assert_eq!(selector.select(None, ActivityLevel::Moderate), 4);
        assert_eq!(selector.select(None, ActivityLevel::Active), 5);
    }
}
