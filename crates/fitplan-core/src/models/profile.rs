// ABOUTME: User profile model consumed read-only by the plan synthesis pipeline
// ABOUTME: Goal, ExperienceLevel, ActivityLevel, and Profile with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::week::DEFAULT_TRAINING_DAYS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// Reduce body fat with higher-volume, shorter-rest sessions
    #[serde(rename = "Weight Loss", alias = "WeightLoss")]
    WeightLoss,
    /// Build muscle with hypertrophy rep ranges
    #[serde(rename = "Muscle Gain", alias = "MuscleGain")]
    MuscleGain,
    /// Maintain current fitness
    Maintenance,
}

impl Goal {
    /// Human-readable label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// Less than roughly six months of consistent training
    Beginner,
    /// Comfortable with the main compound lifts
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// Human-readable label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day-to-day activity outside of training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Mostly seated, little daily movement
    Sedentary,
    /// Light daily movement
    Light,
    /// Moderate daily movement
    Moderate,
    /// Physically active job or lifestyle
    Active,
    /// Very high daily activity
    #[serde(rename = "Very Active", alias = "VeryActive")]
    VeryActive,
}

impl ActivityLevel {
    /// Human-readable label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_training_days() -> u8 {
    DEFAULT_TRAINING_DAYS
}

/// Static user attributes the planner reads before generating a week
///
/// # Examples
///
/// ```rust
/// use fitplan_core::models::{ActivityLevel, ExperienceLevel, Goal, Profile};
/// use uuid::Uuid;
///
/// let profile = Profile {
///     user_id: Uuid::new_v4(),
///     goal: Goal::WeightLoss,
///     experience_level: ExperienceLevel::Beginner,
///     activity_level: ActivityLevel::Moderate,
///     available_days_per_week: 4,
///     injuries_limitations: String::new(),
/// };
/// assert!(profile.validate().is_ok());
/// assert!(!profile.has_limitations());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owner of the profile
    pub user_id: Uuid,
    /// Primary training goal
    pub goal: Goal,
    /// Training experience
    pub experience_level: ExperienceLevel,
    /// Daily activity outside of training
    pub activity_level: ActivityLevel,
    /// Requested training days per week (1-7)
    #[serde(default = "default_training_days")]
    pub available_days_per_week: u8,
    /// Free-text injuries or limitations; empty means none
    #[serde(default)]
    pub injuries_limitations: String,
}

impl Profile {
    /// Check the profile is usable for plan generation
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `available_days_per_week` is outside 1-7
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=7).contains(&self.available_days_per_week) {
            return Err(AppError::invalid_input(format!(
                "available_days_per_week must be between 1 and 7, got {}",
                self.available_days_per_week
            ))
            .with_user_id(self.user_id));
        }
        Ok(())
    }

    /// Whether the user reported any injury or limitation
    #[must_use]
    pub fn has_limitations(&self) -> bool {
        !self.injuries_limitations.trim().is_empty()
    }
}
