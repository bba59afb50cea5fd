// ABOUTME: Exercise and daily log models written by the logging collaborator
// ABOUTME: Read-only inputs for progressive overload and recovery assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a logged exercise or workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompletionStatus {
    /// Every planned set was done
    Completed,
    /// Some sets were done
    Partial,
    /// Nothing was done
    #[default]
    Skipped,
}

/// Perceived difficulty of a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Could have done considerably more
    #[serde(rename = "Too Easy", alias = "TooEasy")]
    TooEasy,
    /// On target
    #[serde(rename = "Just Right", alias = "JustRight")]
    JustRight,
    /// Could not hit the prescription comfortably
    #[serde(rename = "Too Hard", alias = "TooHard")]
    TooHard,
}

/// One performed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDetail {
    /// Set number within the exercise
    pub set_number: u32,
    /// Reps performed
    #[serde(default)]
    pub reps: u32,
    /// Load used (kg), absent for bodyweight work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Perceived difficulty
    pub difficulty: Difficulty,
}

/// Performance of one exercise in one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Store-assigned, monotonically increasing identifier
    #[serde(default)]
    pub id: u64,
    /// Owner
    pub user_id: Uuid,
    /// Exercise name as it appeared in the plan
    pub exercise_name: String,
    /// Plan week the session belonged to
    pub week_number: u32,
    /// Plan day the session belonged to
    #[serde(default)]
    pub day_number: u8,
    /// Completion outcome
    pub completion_status: CompletionStatus,
    /// Sets actually done
    pub sets_completed: u32,
    /// Sets prescribed
    pub sets_planned: u32,
    /// Per-set details
    #[serde(default)]
    pub set_details: Vec<SetDetail>,
    /// When the log was written
    pub created_at: DateTime<Utc>,
}

impl ExerciseLog {
    /// Completed with every planned set done
    #[must_use]
    pub fn fully_completed(&self) -> bool {
        self.completion_status == CompletionStatus::Completed
            && self.sets_completed == self.sets_planned
    }

    /// Every recorded set matches `difficulty` (vacuously true with no sets)
    #[must_use]
    pub fn all_sets_rated(&self, difficulty: Difficulty) -> bool {
        self.set_details
            .iter()
            .all(|set| set.difficulty == difficulty)
    }

    /// At least one recorded set matches `difficulty`
    #[must_use]
    pub fn any_set_rated(&self, difficulty: Difficulty) -> bool {
        self.set_details
            .iter()
            .any(|set| set.difficulty == difficulty)
    }
}

/// Self-reported energy for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnergyLevel {
    /// Feeling fresh
    Energized,
    /// Baseline
    #[default]
    Normal,
    /// Some fatigue
    #[serde(rename = "Slightly Fatigued", alias = "SlightlyFatigued")]
    SlightlyFatigued,
    /// Heavy fatigue
    #[serde(rename = "Very Tired", alias = "VeryTired")]
    VeryTired,
}

impl EnergyLevel {
    /// Whether this energy level signals fatigue
    #[must_use]
    pub const fn is_fatigued(&self) -> bool {
        matches!(self, Self::SlightlyFatigued | Self::VeryTired)
    }
}

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    /// Poor
    Poor,
    /// Fair
    Fair,
    /// Good
    #[default]
    Good,
    /// Great
    Great,
    /// Excellent
    Excellent,
}

/// Diet adherence for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DietAdherence {
    /// Plan followed
    Followed,
    /// Mostly followed
    Mostly,
    /// Deviated from plan
    #[default]
    Deviated,
}

/// One day of recovery signals; unique per (user, date)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Owner
    pub user_id: Uuid,
    /// Calendar date
    pub date: NaiveDate,
    /// Energy level
    #[serde(default)]
    pub energy_level: EnergyLevel,
    /// Mood
    #[serde(default)]
    pub mood: Mood,
    /// Hours slept; 0 means not recorded
    #[serde(default)]
    pub sleep_hours: f64,
    /// Workout adherence
    #[serde(default)]
    pub workout_status: CompletionStatus,
    /// Diet adherence
    #[serde(default)]
    pub diet_adherence: DietAdherence,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}
