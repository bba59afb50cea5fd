// ABOUTME: Progressive overload decisions from recent exercise logs and their application to a week
// ABOUTME: Increase weight, increase reps, decrease, or maintain, with structured guidance notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progressive Overload
//!
//! The decision for an exercise looks at its most recent logs only:
//!
//! | Condition                                             | Action          |
//! |-------------------------------------------------------|-----------------|
//! | fewer logs than `min_logs_for_progression`            | maintain        |
//! | every set rated too easy and every log fully complete | increase weight |
//! | every log fully complete and nothing struggled        | increase reps   |
//! | any log incomplete or any set rated too hard          | decrease        |
//! | otherwise                                             | maintain        |

use crate::config::OverloadConfig;
use fitplan_core::constants::units::KG;
use fitplan_core::models::{
    CompletionStatus, DayPlan, Difficulty, ExerciseEntry, ExerciseLog, IntensityLevel, NoteKind,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Recommended change for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadAction {
    /// Keep the prescription
    Maintain,
    /// Add load
    IncreaseWeight,
    /// Add reps
    IncreaseReps,
    /// Back off
    Decrease,
}

/// Decision plus the numbers behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadDecision {
    /// Recommended change
    pub action: OverloadAction,
    /// Human-readable reason
    pub reason: String,
    /// Suggested load change (kg); positive adds, negative removes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_change_kg: Option<f64>,
    /// Suggested reps added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_increase: Option<u32>,
}

impl OverloadDecision {
    fn maintain(reason: &str) -> Self {
        Self {
            action: OverloadAction::Maintain,
            reason: reason.to_owned(),
            weight_change_kg: None,
            rep_increase: None,
        }
    }
}

/// Computes and applies progressive overload
#[derive(Debug, Clone, Default)]
pub struct OverloadCalculator {
    config: OverloadConfig,
}

impl OverloadCalculator {
    /// Create a calculator with explicit thresholds
    #[must_use]
    pub const fn new(config: OverloadConfig) -> Self {
        Self { config }
    }

    /// Number of logs to request per exercise
    #[must_use]
    pub const fn history_window(&self) -> usize {
        self.config.history_window
    }

    /// Decide the change for one exercise from its logs
    ///
    /// Logs are ordered newest first (`created_at`, then `id`) before the
    /// window is applied, so callers may pass them in any order.
    #[must_use]
    pub fn decide(&self, logs: &[ExerciseLog]) -> OverloadDecision {
        let mut recent: Vec<&ExerciseLog> = logs.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        recent.truncate(self.config.history_window);

        if recent.len() < self.config.min_logs_for_progression {
            return OverloadDecision::maintain("Need more data to calculate progression");
        }

        let all_too_easy = recent
            .iter()
            .all(|log| log.all_sets_rated(Difficulty::TooEasy));
        let all_completed = recent.iter().all(|log| log.fully_completed());
        let struggled = recent.iter().any(|log| {
            log.completion_status != CompletionStatus::Completed
                || log.any_set_rated(Difficulty::TooHard)
        });

        if all_too_easy && all_completed {
            OverloadDecision {
                action: OverloadAction::IncreaseWeight,
                reason: "Exercise is too easy - increase weight by 2.5-5kg".to_owned(),
                weight_change_kg: Some(self.config.weight_increment_kg),
                rep_increase: None,
            }
        } else if all_completed && !struggled {
            OverloadDecision {
                action: OverloadAction::IncreaseReps,
                reason: format!(
                    "Good performance - increase reps by {}",
                    self.config.rep_increment
                ),
                weight_change_kg: None,
                rep_increase: Some(self.config.rep_increment),
            }
        } else if struggled {
            OverloadDecision {
                action: OverloadAction::Decrease,
                reason: "Exercise is too challenging - reduce weight or reps".to_owned(),
                weight_change_kg: Some(-self.config.weight_decrement_kg),
                rep_increase: None,
            }
        } else {
            OverloadDecision::maintain("Current intensity is appropriate")
        }
    }

    /// Apply a decision to one exercise
    ///
    /// Returns whether the entry changed.
    pub fn apply(&self, entry: &mut ExerciseEntry, decision: &OverloadDecision) -> bool {
        match decision.action {
            OverloadAction::Maintain => false,
            OverloadAction::IncreaseWeight => {
                let added = decision
                    .weight_change_kg
                    .unwrap_or(self.config.weight_increment_kg);
                entry.intensity_level = IntensityLevel::High;
                entry.annotate(
                    NoteKind::IncreaseWeight,
                    format!("INCREASE WEIGHT: Add {added}{KG} from last week"),
                );
                true
            }
            OverloadAction::IncreaseReps => {
                let by = decision.rep_increase.unwrap_or(self.config.rep_increment);
                if let Some(increased) = entry.reps.increased_range(by) {
                    entry.reps = increased;
                }
                entry.annotate(
                    NoteKind::IncreaseReps,
                    format!("INCREASED REPS: {}", decision.reason),
                );
                true
            }
            OverloadAction::Decrease => {
                entry.intensity_level = IntensityLevel::Light;
                entry.annotate(
                    NoteKind::ReduceIntensity,
                    format!("REDUCE INTENSITY: {}", decision.reason),
                );
                true
            }
        }
    }

    /// Apply precomputed decisions to every exercise in a week
    ///
    /// Exercises without a decision are left untouched. Returns the number of
    /// entries changed.
    pub fn apply_to_week(
        &self,
        days: &mut [DayPlan],
        decisions: &HashMap<String, OverloadDecision>,
    ) -> usize {
        let mut changed = 0;
        for entry in days.iter_mut().flat_map(|day| day.exercises.iter_mut()) {
            if let Some(decision) = decisions.get(&entry.name) {
                if self.apply(entry, decision) {
                    changed += 1;
                    debug!(exercise = %entry.name, action = ?decision.action, "Applied overload");
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use fitplan_core::models::{Reps, SetDetail};
    use uuid::Uuid;

    fn log(id: u64, status: CompletionStatus, difficulty: Difficulty) -> ExerciseLog {
        ExerciseLog {
            id,
            user_id: Uuid::nil(),
            exercise_name: "Goblet Squat".to_owned(),
            week_number: 1,
            day_number: 1,
            completion_status: status,
            sets_completed: 3,
            sets_planned: 3,
            set_details: (1..=3)
                .map(|set_number| SetDetail {
                    set_number,
                    reps: 10,
                    weight_kg: Some(20.0),
                    difficulty,
                })
                .collect(),
            created_at: Utc::now() - Duration::hours(i64::try_from(10 - id).unwrap()),
        }
    }

    fn entry() -> ExerciseEntry {
        ExerciseEntry {
            name: "Goblet Squat".to_owned(),
            sets: 3,
            reps: Reps::parse("8-12"),
            rest_seconds: 60,
            intensity_level: IntensityLevel::Moderate,
            guidance: "Sit between your hips.".to_owned(),
            annotations: Vec::new(),
        }
    }

    #[test]
    fn test_single_log_maintains() {
        let calculator = OverloadCalculator::default();
        let decision =
            calculator.decide(&[log(1, CompletionStatus::Completed, Difficulty::TooEasy)]);
        assert_eq!(decision.action, OverloadAction::Maintain);
        assert_eq!(decision.reason, "Need more data to calculate progression");
    }

    #[test]
    fn test_window_ignores_older_logs() {
        let calculator = OverloadCalculator::default();
        let logs = [
            log(1, CompletionStatus::Skipped, Difficulty::TooHard),
            log(2, CompletionStatus::Completed, Difficulty::TooEasy),
            log(3, CompletionStatus::Completed, Difficulty::TooEasy),
        ];
        assert_eq!(
            calculator.decide(&logs).action,
            OverloadAction::IncreaseWeight
        );
    }

    #[test]
    fn test_completed_with_too_hard_set_decreases() {
        let calculator = OverloadCalculator::default();
        let logs = [
            log(1, CompletionStatus::Completed, Difficulty::JustRight),
            log(2, CompletionStatus::Completed, Difficulty::TooHard),
        ];
        assert_eq!(calculator.decide(&logs).action, OverloadAction::Decrease);
    }

    #[test]
    fn test_completed_with_unmet_sets_maintains() {
        let calculator = OverloadCalculator::default();
        let mut short = log(2, CompletionStatus::Completed, Difficulty::JustRight);
        short.sets_completed = 2;
        let logs = [log(1, CompletionStatus::Completed, Difficulty::JustRight), short];
        let decision = calculator.decide(&logs);
        assert_eq!(decision.action, OverloadAction::Maintain);
        assert_eq!(decision.reason, "Current intensity is appropriate");
    }

    #[test]
    fn test_increase_reps_shifts_range_and_annotates() {
        let calculator = OverloadCalculator::default();
        let decision = calculator.decide(&[
            log(1, CompletionStatus::Completed, Difficulty::JustRight),
            log(2, CompletionStatus::Completed, Difficulty::JustRight),
        ]);
        let mut target = entry();
        assert!(calculator.apply(&mut target, &decision));
        assert_eq!(target.reps.to_string(), "10-14");
        assert_eq!(
            target.rendered_guidance(),
            "Sit between your hips. | INCREASED REPS: Good performance - increase reps by 2"
        );
    }

    #[test]
    fn test_increase_reps_on_fixed_reps_only_annotates() {
        let calculator = OverloadCalculator::default();
        let decision = calculator.decide(&[
            log(1, CompletionStatus::Completed, Difficulty::JustRight),
            log(2, CompletionStatus::Completed, Difficulty::JustRight),
        ]);
        let mut target = entry();
        target.reps = Reps::Fixed(10);
        calculator.apply(&mut target, &decision);
        assert_eq!(target.reps, Reps::Fixed(10));
        assert!(target.has_note(NoteKind::IncreaseReps));
    }

    #[test]
    fn test_increase_weight_note_text() {
        let calculator = OverloadCalculator::default();
        let decision = calculator.decide(&[
            log(1, CompletionStatus::Completed, Difficulty::TooEasy),
            log(2, CompletionStatus::Completed, Difficulty::TooEasy),
        ]);
        let mut target = entry();
        calculator.apply(&mut target, &decision);
        assert_eq!(target.intensity_level, IntensityLevel::High);
        assert_eq!(
            target.annotations[0].text,
            "INCREASE WEIGHT: Add 2.5kg from last week"
        );
    }
}
