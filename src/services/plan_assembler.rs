// ABOUTME: Final validation gate and composition of a weekly workout plan
// ABOUTME: Rejects malformed weeks from any source and applies precomputed overload decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::plan_sources::{CandidatePlan, PlanRequest};
use fitplan_core::constants::messages::PROGRESSION_APPLIED;
use fitplan_core::models::{validate_week_shape, FatigueStatus, WorkoutPlan};
use fitplan_intelligence::{OverloadCalculator, OverloadDecision};
use std::collections::HashMap;
use tracing::debug;

/// Turns a candidate week into the plan that gets stored
///
/// Pure: no I/O. Overload decisions are looked up by the caller and passed in.
#[derive(Debug, Clone, Default)]
pub struct PlanAssembler {
    overload: OverloadCalculator,
}

impl PlanAssembler {
    /// Create an assembler with a configured overload calculator
    #[must_use]
    pub const fn new(overload: OverloadCalculator) -> Self {
        Self { overload }
    }

    /// Validate and compose the plan
    ///
    /// `decisions` is `Some` when the previous week had logged performance;
    /// in that case the progression note defaults to the standard message if
    /// the source did not supply one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlanShape` unless the candidate holds exactly seven
    /// well-formed days numbered 1-7
    pub fn assemble(
        &self,
        request: &PlanRequest,
        candidate: CandidatePlan,
        decisions: Option<&HashMap<String, OverloadDecision>>,
    ) -> AppResult<WorkoutPlan> {
        validate_week_shape(&candidate.days).map_err(|e| {
            e.with_user_id(request.user_id)
                .with_week(request.week_number)
        })?;

        let mut days = candidate.days;
        let mut narrative = candidate.narrative;
        if let Some(decisions) = decisions {
            let changed = self.overload.apply_to_week(&mut days, decisions);
            debug!(
                user_id = %request.user_id,
                week = request.week_number,
                changed,
                "Progressive overload applied"
            );
            narrative
                .progression_notes
                .get_or_insert_with(|| PROGRESSION_APPLIED.to_owned());
        }

        Ok(WorkoutPlan {
            user_id: request.user_id,
            week_number: request.week_number,
            goal: request.goal,
            experience_level: request.experience_level,
            fatigue_status: FatigueStatus::Normal,
            workouts: days,
            narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_sources::{PlanSourceKind, TemplatePlanSource};
    use fitplan_core::models::{ActivityLevel, ExperienceLevel, Goal, PlanNarrative};
    use uuid::Uuid;

    fn request() -> PlanRequest {
        PlanRequest {
            user_id: Uuid::new_v4(),
            week_number: 2,
            goal: Goal::MuscleGain,
            experience_level: ExperienceLevel::Intermediate,
            activity_level: ActivityLevel::Moderate,
            injuries_limitations: String::new(),
            training_days: 4,
        }
    }

    #[test]
    fn test_empty_decisions_still_set_progression_note() {
        let request = request();
        let mut candidate = TemplatePlanSource::default().build(&request);
        candidate.narrative = PlanNarrative::default();

        let plan = PlanAssembler::default()
            .assemble(&request, candidate, Some(&HashMap::new()))
            .unwrap();
        assert_eq!(
            plan.narrative.progression_notes.as_deref(),
            Some(PROGRESSION_APPLIED)
        );
        assert_eq!(plan.fatigue_status, FatigueStatus::Normal);
    }

    #[test]
    fn test_source_note_is_kept() {
        let request = request();
        let mut candidate = TemplatePlanSource::default().build(&request);
        candidate.source = PlanSourceKind::Ai;
        candidate.narrative.progression_notes = Some("Add a rep each session".to_owned());

        let plan = PlanAssembler::default()
            .assemble(&request, candidate, Some(&HashMap::new()))
            .unwrap();
        assert_eq!(
            plan.narrative.progression_notes.as_deref(),
            Some("Add a rep each session")
        );
    }
}
