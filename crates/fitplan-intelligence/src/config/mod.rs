// ABOUTME: Planner configuration container with defaults, validation, and env overrides
// ABOUTME: Aggregates schedule, template, overload, and recovery settings behind a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Every threshold used by the plan synthesis pipeline lives here. Values
//! default to the documented behavior and can be overridden with `FITPLAN_*`
//! environment variables.

/// Configuration error types
pub mod error;
/// Progressive overload settings
pub mod progression;
/// Recovery adjustment settings
pub mod recovery;
/// Training-day and template settings
pub mod schedule;

pub use error::ConfigError;
pub use progression::OverloadConfig;
pub use recovery::RecoveryConfig;
pub use schedule::{TemplateConfig, TrainingDaysConfig};

use fitplan_core::constants::week::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Activity-level training-day clamps
    pub training_days: TrainingDaysConfig,
    /// Template prescription defaults
    pub template: TemplateConfig,
    /// Progressive overload thresholds
    pub overload: OverloadConfig,
    /// Recovery adjustment thresholds
    pub recovery: RecoveryConfig,
}

impl PlannerConfig {
    /// Get the global configuration, loading it on first use
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_training_days()?;
        self.validate_template()?;
        self.validate_overload()?;
        self.validate_recovery()
    }

    fn validate_training_days(&self) -> Result<(), ConfigError> {
        let days = &self.training_days;
        let max_days = u8::try_from(DAYS_PER_WEEK).unwrap_or(u8::MAX);
        for value in [
            days.default_days,
            days.sedentary_max_days,
            days.active_max_days,
        ] {
            if !(1..=max_days).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(
                    "training day limits must be between 1 and 7",
                ));
            }
        }
        if days.sedentary_max_days > days.active_max_days {
            return Err(ConfigError::InvalidRange(
                "sedentary_max_days must be <= active_max_days",
            ));
        }
        Ok(())
    }

    fn validate_template(&self) -> Result<(), ConfigError> {
        let template = &self.template;
        if template.beginner_sets == 0 || template.intermediate_sets == 0 || template.advanced_sets == 0
        {
            return Err(ConfigError::ValueOutOfRange("set counts must be positive"));
        }
        for (min, max) in [
            template.muscle_gain_reps,
            template.weight_loss_reps,
            template.maintenance_reps,
        ] {
            if min == 0 || min > max {
                return Err(ConfigError::InvalidRange(
                    "rep ranges must satisfy 0 < min <= max",
                ));
            }
        }
        Ok(())
    }

    fn validate_overload(&self) -> Result<(), ConfigError> {
        let overload = &self.overload;
        if overload.min_logs_for_progression == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_logs_for_progression must be at least 1",
            ));
        }
        if overload.history_window < overload.min_logs_for_progression {
            return Err(ConfigError::InvalidRange(
                "history_window must be >= min_logs_for_progression",
            ));
        }
        if overload.weight_increment_kg <= 0.0 || overload.weight_decrement_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight increments must be positive",
            ));
        }
        if overload.rep_increment == 0 {
            return Err(ConfigError::ValueOutOfRange("rep_increment must be positive"));
        }
        Ok(())
    }

    fn validate_recovery(&self) -> Result<(), ConfigError> {
        let recovery = &self.recovery;
        if recovery.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("window_days must be positive"));
        }
        if !(0.0..=24.0).contains(&recovery.low_sleep_threshold_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "low_sleep_threshold_hours must be between 0 and 24",
            ));
        }
        if !(0.0..1.0).contains(&recovery.majority_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "majority_ratio must be in [0, 1)",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FITPLAN_DEFAULT_TRAINING_DAYS",
            &mut self.training_days.default_days,
        )?;
        Self::apply_env_var(
            "FITPLAN_SEDENTARY_MAX_DAYS",
            &mut self.training_days.sedentary_max_days,
        )?;
        Self::apply_env_var(
            "FITPLAN_ACTIVE_MAX_DAYS",
            &mut self.training_days.active_max_days,
        )?;

        Self::apply_env_var(
            "FITPLAN_OVERLOAD_HISTORY_WINDOW",
            &mut self.overload.history_window,
        )?;
        Self::apply_env_var(
            "FITPLAN_OVERLOAD_WEIGHT_INCREMENT_KG",
            &mut self.overload.weight_increment_kg,
        )?;
        Self::apply_env_var(
            "FITPLAN_OVERLOAD_WEIGHT_DECREMENT_KG",
            &mut self.overload.weight_decrement_kg,
        )?;
        Self::apply_env_var(
            "FITPLAN_OVERLOAD_REP_INCREMENT",
            &mut self.overload.rep_increment,
        )?;

        Self::apply_env_var(
            "FITPLAN_RECOVERY_WINDOW_DAYS",
            &mut self.recovery.window_days,
        )?;
        Self::apply_env_var(
            "FITPLAN_RECOVERY_LOW_SLEEP_HOURS",
            &mut self.recovery.low_sleep_threshold_hours,
        )?;
        Self::apply_env_var(
            "FITPLAN_RECOVERY_MAJORITY_RATIO",
            &mut self.recovery.majority_ratio,
        )?;
        Self::apply_env_var(
            "FITPLAN_RECOVERY_CONVERT_TRAINING_DAY",
            &mut self.recovery.convert_training_day,
        )?;

        Ok(self)
    }
}
