// ABOUTME: Deterministic template week generator used when no external generator is available
// ABOUTME: Chooses a split, places training days, filters injuries, and prescribes sets/reps/rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::TemplateConfig;
use crate::exercise_catalog::{
    Limitation, Movement, MovementKind, Resolved, SplitDay, CONDITIONING_FINISHER,
};
use fitplan_core::constants::week::{day_name, DAYS_PER_WEEK, REST_DAY_TYPE};
use fitplan_core::models::{
    ActivityLevel, DayPlan, ExerciseEntry, ExperienceLevel, FatigueStatus, Goal, IntensityLevel,
    PlanNarrative, Reps,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Description of conditioning work reps
const CONDITIONING_REPS: &str = "30s on / 30s off";

/// Inputs for a template week
#[derive(Debug, Clone)]
pub struct TemplateRequest<'a> {
    /// Training goal
    pub goal: Goal,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Fatigue status to prescribe for
    pub fatigue_status: FatigueStatus,
    /// Free-text injuries or limitations
    pub injuries: &'a str,
    /// Effective training days (clamped to 1-7)
    pub training_days: u8,
    /// Week number, used for the narrative
    pub week_number: u32,
}

/// Seven days plus narrative produced by the template
#[derive(Debug, Clone)]
pub struct TemplateWeek {
    /// Day 1 through day 7
    pub days: Vec<DayPlan>,
    /// Summary, tips, and motivation
    pub narrative: PlanNarrative,
}

/// Rule-based week builder
#[derive(Debug, Clone, Default)]
pub struct TemplateGenerator {
    config: TemplateConfig,
}

impl TemplateGenerator {
    /// Create a generator with explicit prescription defaults
    #[must_use]
    pub const fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// Build a full week
    ///
    /// Always returns seven days with exactly `7 - training_days` rest days.
    #[must_use]
    pub fn generate(&self, request: &TemplateRequest<'_>) -> TemplateWeek {
        let training_days = request.training_days.clamp(1, 7);
        let limitations = Limitation::parse_all(request.injuries);
        let split = split_for(training_days, request.experience_level);
        let placement = training_day_indices(training_days);

        debug!(
            training_days,
            limitations = limitations.len(),
            goal = %request.goal,
            "Generating template week"
        );

        let mut sessions = split.iter().zip(placement.iter());
        let mut next = sessions.next();
        let days = (1_u8..)
            .take(DAYS_PER_WEEK)
            .map(|day| match next {
                Some((session, &index)) if index == day => {
                    next = sessions.next();
                    self.training_day(day, *session, request, &limitations)
                }
                _ => rest_day(day),
            })
            .collect();

        TemplateWeek {
            days,
            narrative: narrative(request, training_days),
        }
    }

    fn training_day(
        &self,
        day: u8,
        session: SplitDay,
        request: &TemplateRequest<'_>,
        limitations: &BTreeSet<Limitation>,
    ) -> DayPlan {
        let finisher = (request.goal == Goal::WeightLoss && session != SplitDay::ConditioningCore)
            .then_some(&CONDITIONING_FINISHER);

        let mut used = BTreeSet::new();
        let mut exercises = Vec::new();
        for slot in session.slots().iter().chain(finisher) {
            if let Some(resolved) = slot.resolve(limitations, &used) {
                used.insert(resolved.movement.name);
                exercises.push(self.prescribe(&resolved, request, limitations));
            }
        }

        DayPlan {
            day,
            day_name: day_name(day),
            rest_day: false,
            day_type: session.label().to_owned(),
            exercises,
        }
    }

    fn prescribe(
        &self,
        resolved: &Resolved,
        request: &TemplateRequest<'_>,
        limitations: &BTreeSet<Limitation>,
    ) -> ExerciseEntry {
        let movement = &resolved.movement;
        let mut guidance = format!(
            "{}. {}",
            movement.cue,
            experience_note(request.experience_level)
        );
        if let Some(replaced) = &resolved.replaced {
            let reasons: Vec<&str> = replaced.conflicts(limitations).map(Limitation::label).collect();
            guidance.push_str(&format!(
                " Substituted for {} ({}).",
                replaced.name,
                reasons.join(", ")
            ));
        }

        let mut sets = self.base_sets(movement, request.experience_level);
        let mut intensity = base_intensity(movement.kind, request.experience_level);
        match request.fatigue_status {
            FatigueStatus::Normal => {}
            FatigueStatus::Light => intensity = intensity.step_down(),
            FatigueStatus::Reduced => {
                intensity = intensity.step_down();
                sets = sets.saturating_sub(1).max(1);
            }
        }

        ExerciseEntry {
            name: movement.name.to_owned(),
            sets,
            reps: self.reps(movement.kind, request.goal),
            rest_seconds: self.rest_seconds(request.goal, request.activity_level),
            intensity_level: intensity,
            guidance,
            annotations: Vec::new(),
        }
    }

    fn base_sets(&self, movement: &Movement, experience: ExperienceLevel) -> u32 {
        match experience {
            ExperienceLevel::Beginner => self.config.beginner_sets,
            ExperienceLevel::Intermediate if movement.kind == MovementKind::Compound => self
                .config
                .intermediate_sets
                .saturating_add(self.config.compound_extra_sets),
            ExperienceLevel::Intermediate => self.config.intermediate_sets,
            ExperienceLevel::Advanced => self.config.advanced_sets,
        }
    }

    fn reps(&self, kind: MovementKind, goal: Goal) -> Reps {
        if kind == MovementKind::Conditioning {
            return Reps::Descriptive(CONDITIONING_REPS.to_owned());
        }
        let (min, max) = match goal {
            Goal::MuscleGain => self.config.muscle_gain_reps,
            Goal::WeightLoss => self.config.weight_loss_reps,
            Goal::Maintenance => self.config.maintenance_reps,
        };
        Reps::Range { min, max }
    }

    fn rest_seconds(&self, goal: Goal, activity: ActivityLevel) -> u32 {
        let base = match goal {
            Goal::MuscleGain => self.config.muscle_gain_rest_seconds,
            Goal::WeightLoss => self.config.weight_loss_rest_seconds,
            Goal::Maintenance => self.config.maintenance_rest_seconds,
        };
        if activity == ActivityLevel::Sedentary {
            base.saturating_add(self.config.sedentary_extra_rest_seconds)
        } else {
            base
        }
    }
}

/// Split sessions in training order for `days` training days
#[must_use]
pub fn split_for(days: u8, experience: ExperienceLevel) -> Vec<SplitDay> {
    use SplitDay::{
        ConditioningCore, FullBody, FullBodyA, FullBodyB, Legs, Lower, Pull, Push, Upper,
    };
    let beginner = experience == ExperienceLevel::Beginner;
    match days.clamp(1, 7) {
        1 => vec![FullBody],
        2 => vec![FullBodyA, FullBodyB],
        3 if beginner => vec![FullBodyA, FullBodyB, FullBodyA],
        3 => vec![Push, Pull, Legs],
        4 => vec![Upper, Lower, Upper, Lower],
        5 if beginner => vec![Upper, Lower, FullBody, Upper, Lower],
        5 => vec![Push, Pull, Legs, Upper, Lower],
        6 => vec![Push, Pull, Legs, Push, Pull, Legs],
        _ => vec![Push, Pull, Legs, Push, Pull, Legs, ConditioningCore],
    }
}

/// 1-based day indices that carry training sessions
#[must_use]
pub fn training_day_indices(days: u8) -> &'static [u8] {
    match days.clamp(1, 7) {
        1 => &[1],
        2 => &[1, 4],
        3 => &[1, 3, 5],
        4 => &[1, 2, 4, 5],
        5 => &[1, 2, 3, 5, 6],
        6 => &[1, 2, 3, 4, 5, 6],
        _ => &[1, 2, 3, 4, 5, 6, 7],
    }
}

fn rest_day(day: u8) -> DayPlan {
    DayPlan {
        day,
        day_name: day_name(day),
        rest_day: true,
        day_type: REST_DAY_TYPE.to_owned(),
        exercises: Vec::new(),
    }
}

const fn base_intensity(kind: MovementKind, experience: ExperienceLevel) -> IntensityLevel {
    match (experience, kind) {
        (ExperienceLevel::Beginner, MovementKind::Compound)
        | (ExperienceLevel::Intermediate, _)
        | (ExperienceLevel::Advanced, MovementKind::Accessory | MovementKind::Conditioning) => {
            IntensityLevel::Moderate
        }
        (ExperienceLevel::Beginner, MovementKind::Accessory | MovementKind::Conditioning) => {
            IntensityLevel::Light
        }
        (ExperienceLevel::Advanced, MovementKind::Compound) => IntensityLevel::High,
    }
}

const fn experience_note(experience: ExperienceLevel) -> &'static str {
    match experience {
        ExperienceLevel::Beginner => "Focus on form and stop two to three reps short of failure.",
        ExperienceLevel::Intermediate => "Leave one or two reps in reserve on each set.",
        ExperienceLevel::Advanced => "Take the final set close to failure with clean technique.",
    }
}

fn narrative(request: &TemplateRequest<'_>, training_days: u8) -> PlanNarrative {
    let mut week_summary = format!(
        "Week {} - {} {} Program ({training_days} days/week)",
        request.week_number, request.experience_level, request.goal
    );
    let injuries = request.injuries.trim();
    if !injuries.is_empty() {
        week_summary.push_str(&format!(" (Modified for: {injuries})"));
    }

    let progression_notes = (request.week_number == 1).then(|| {
        "First week: learn the movements and record every set so next week can progress."
            .to_owned()
    });

    let motivation = match request.goal {
        Goal::WeightLoss => "Every session moves you closer. Consistency beats intensity.",
        Goal::MuscleGain => "Progress is built one rep at a time. Eat well and lift with intent.",
        Goal::Maintenance => "Showing up is the win. Keep the habit strong.",
    };

    PlanNarrative {
        week_summary: Some(week_summary),
        progression_notes,
        recovery_tips: Some(
            "Sleep 7-9 hours, stay hydrated, and keep rest days easy.".to_owned(),
        ),
        motivation_message: Some(motivation.to_owned()),
    }
}
