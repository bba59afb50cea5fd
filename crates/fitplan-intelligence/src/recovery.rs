// ABOUTME: Recovery assessment from recent daily logs and read-time plan lightening
// ABOUTME: Detects fatigue and low-sleep patterns, returns an adjusted copy of the issued plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Adjustment
//!
//! A plan is lightened when recent daily logs show a fatigue or short-sleep
//! pattern, or when the most recent log reports fatigue. Adjustments are made
//! on a copy; the plan passed in is never modified.

use crate::config::RecoveryConfig;
use crate::exercise_catalog::MOBILITY_FLOW;
use fitplan_core::constants::messages::{RECOVERY_LIGHT, RECOVERY_REDUCED};
use fitplan_core::constants::week::ACTIVE_RECOVERY_TYPE;
use fitplan_core::models::{
    DailyLog, EnergyLevel, ExerciseEntry, FatigueStatus, IntensityLevel, NoteKind, Reps,
    WorkoutPlan,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Rest between mobility drills (seconds)
const MOBILITY_REST_SECONDS: u32 = 30;

/// Summary of recent recovery signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAssessment {
    /// Fatigue or short sleep on a strict majority of inspected days
    pub recovery_needed: bool,
    /// Energy reported on the most recent day, if any
    pub current_energy: Option<EnergyLevel>,
    /// Days reporting slight fatigue or heavy tiredness
    pub fatigue_days: usize,
    /// Days with recorded sleep below the threshold
    pub low_sleep_days: usize,
    /// Mean of recorded (non-zero) sleep hours
    pub average_sleep_hours: Option<f64>,
    /// Daily logs inspected
    pub days_analyzed: usize,
    /// Advice for the user
    pub message: String,
}

/// Suggested change to today's effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityAdjustment {
    /// Train harder than planned if it feels good
    Increase,
    /// Train as planned
    Maintain,
    /// Drop one intensity step
    Decrease,
    /// Swap training for rest or light mobility
    Rest,
}

/// Recommendation for a single reported energy level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecommendation {
    /// Energy the recommendation is for
    pub energy_level: EnergyLevel,
    /// Suggested effort change
    pub intensity_adjustment: IntensityAdjustment,
    /// Advice for the user
    pub message: String,
}

/// Recommend today's effort from a reported energy level
#[must_use]
pub fn recommend_for_energy(energy_level: EnergyLevel) -> EnergyRecommendation {
    let (intensity_adjustment, message) = match energy_level {
        EnergyLevel::Energized => (
            IntensityAdjustment::Increase,
            "You're feeling great. Push a little harder today if your form stays solid.",
        ),
        EnergyLevel::Normal => (
            IntensityAdjustment::Maintain,
            "Energy is normal. Follow your plan as written.",
        ),
        EnergyLevel::SlightlyFatigued => (
            IntensityAdjustment::Decrease,
            "You're slightly fatigued. Lower the intensity and focus on technique.",
        ),
        EnergyLevel::VeryTired => (
            IntensityAdjustment::Rest,
            "You're very tired. Take a rest day or do light mobility work instead.",
        ),
    };
    EnergyRecommendation {
        energy_level,
        intensity_adjustment,
        message: message.to_owned(),
    }
}

/// Assesses recovery signals and lightens plans
#[derive(Debug, Clone, Default)]
pub struct RecoveryAdjuster {
    config: RecoveryConfig,
}

impl RecoveryAdjuster {
    /// Create an adjuster with explicit thresholds
    #[must_use]
    pub const fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Number of daily logs to request
    #[must_use]
    pub const fn window_days(&self) -> usize {
        self.config.window_days
    }

    /// Summarize the most recent `window_days` logs
    ///
    /// Logs may be passed in any order; they are sorted newest first.
    #[must_use]
    pub fn assess(&self, logs: &[DailyLog]) -> RecoveryAssessment {
        let mut recent: Vec<&DailyLog> = logs.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(self.config.window_days);

        let days_analyzed = recent.len();
        let fatigue_days = recent
            .iter()
            .filter(|log| log.energy_level.is_fatigued())
            .count();
        let low_sleep_days = recent
            .iter()
            .filter(|log| self.is_low_sleep(log.sleep_hours))
            .count();

        let recorded: Vec<f64> = recent
            .iter()
            .map(|log| log.sleep_hours)
            .filter(|hours| *hours > 0.0)
            .collect();
        let average_sleep_hours = (!recorded.is_empty())
            .then(|| recorded.iter().sum::<f64>() / count_as_f64(recorded.len()));

        let recovery_needed = self.is_majority(fatigue_days, days_analyzed)
            || self.is_majority(low_sleep_days, days_analyzed);
        let current_energy = recent.first().map(|log| log.energy_level);

        let message = if recovery_needed {
            format!(
                "Recovery needed: {fatigue_days} fatigued and {low_sleep_days} short-sleep days in the last {days_analyzed}. Your plan has been lightened."
            )
        } else if current_energy.is_some_and(|energy| energy.is_fatigued()) {
            "You reported fatigue today. Today's intensity has been lowered.".to_owned()
        } else if days_analyzed == 0 {
            "No daily logs yet. Log your energy and sleep to get recovery guidance.".to_owned()
        } else {
            "Recovery looks good. Train as planned.".to_owned()
        };

        RecoveryAssessment {
            recovery_needed,
            current_energy,
            fatigue_days,
            low_sleep_days,
            average_sleep_hours,
            days_analyzed,
            message,
        }
    }

    /// Fatigue status a plan should carry for an assessment
    #[must_use]
    pub fn target_status(assessment: &RecoveryAssessment) -> FatigueStatus {
        if assessment.recovery_needed || assessment.current_energy == Some(EnergyLevel::VeryTired)
        {
            FatigueStatus::Reduced
        } else if assessment
            .current_energy
            .is_some_and(|energy| energy.is_fatigued())
        {
            FatigueStatus::Light
        } else {
            FatigueStatus::Normal
        }
    }

    /// Lightened copy of `plan`, or `None` when no adjustment is warranted
    #[must_use]
    pub fn adjust(&self, plan: &WorkoutPlan, logs: &[DailyLog]) -> Option<WorkoutPlan> {
        let assessment = self.assess(logs);
        let status = Self::target_status(&assessment);
        if status == FatigueStatus::Normal {
            debug!(user_id = %plan.user_id, "No recovery adjustment needed");
            return None;
        }

        let mut adjusted = plan.clone();
        adjusted.fatigue_status = status;

        let note = match status {
            FatigueStatus::Reduced => {
                "RECOVERY: Intensity and volume reduced based on recent fatigue"
            }
            FatigueStatus::Light | FatigueStatus::Normal => {
                "RECOVERY: Intensity lowered based on today's energy"
            }
        };
        for day in adjusted.workouts.iter_mut().filter(|day| !day.rest_day) {
            for entry in &mut day.exercises {
                entry.intensity_level = entry.intensity_level.step_down();
                if status == FatigueStatus::Reduced {
                    entry.sets = entry.sets.saturating_sub(1).max(1);
                }
                entry.annotate(NoteKind::Recovery, note);
            }
        }

        if status == FatigueStatus::Reduced {
            self.convert_last_training_day(&mut adjusted);
            adjusted.narrative.recovery_tips = Some(RECOVERY_REDUCED.to_owned());
        } else {
            adjusted.narrative.recovery_tips = Some(RECOVERY_LIGHT.to_owned());
        }

        info!(
            user_id = %plan.user_id,
            week = plan.week_number,
            status = ?status,
            fatigue_days = assessment.fatigue_days,
            low_sleep_days = assessment.low_sleep_days,
            "Applied recovery adjustment"
        );
        Some(adjusted)
    }

    fn convert_last_training_day(&self, plan: &mut WorkoutPlan) {
        if !self.config.convert_training_day
            || plan.training_day_count() < self.config.min_training_days_for_conversion
        {
            return;
        }
        if let Some(day) = plan.workouts.iter_mut().rev().find(|day| !day.rest_day) {
            day.day_type = ACTIVE_RECOVERY_TYPE.to_owned();
            day.exercises = MOBILITY_FLOW
                .iter()
                .map(|movement| ExerciseEntry {
                    name: movement.name.to_owned(),
                    sets: 1,
                    reps: Reps::Descriptive("5 minutes".to_owned()),
                    rest_seconds: MOBILITY_REST_SECONDS,
                    intensity_level: IntensityLevel::Light,
                    guidance: movement.cue.to_owned(),
                    annotations: Vec::new(),
                })
                .collect();
        }
    }

    fn is_low_sleep(&self, hours: f64) -> bool {
        hours > 0.0 && hours < self.config.low_sleep_threshold_hours
    }

    fn is_majority(&self, count: usize, total: usize) -> bool {
        total > 0 && count_as_f64(count) > count_as_f64(total) * self.config.majority_ratio
    }
}

fn count_as_f64(count: usize) -> f64 {
    // Safe: daily-log windows are tiny
    count as f64
}
