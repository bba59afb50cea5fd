// ABOUTME: Weekly workout plan models shared by generators, adjusters, and stores
// ABOUTME: WorkoutPlan, DayPlan, ExerciseEntry, Reps, guidance annotations, and shape validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::week::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};
use crate::models::profile::{ExperienceLevel, Goal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// How much the issued plan has been lightened for recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FatigueStatus {
    /// Plan as generated
    #[default]
    Normal,
    /// Intensity lowered one step
    Light,
    /// Intensity and volume lowered, one session converted to active recovery
    Reduced,
}

/// Effort level for a single exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntensityLevel {
    /// Easy effort, several reps in reserve
    Light,
    /// Challenging but sustainable
    Moderate,
    /// Close to limit
    High,
}

impl IntensityLevel {
    /// One step lighter, never below `Light`
    #[must_use]
    pub const fn step_down(self) -> Self {
        match self {
            Self::High => Self::Moderate,
            Self::Moderate | Self::Light => Self::Light,
        }
    }
}

/// Repetition prescription
///
/// Serialized as a string (`"10"`, `"8-12"`, `"30s"`); deserialized from a string
/// or a bare JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RepsRepr", into = "String")]
pub enum Reps {
    /// Fixed repetition count
    Fixed(u32),
    /// Inclusive "min-max" range
    Range {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// Anything else ("30s", "AMRAP", "to failure")
    Descriptive(String),
}

impl Reps {
    /// Parse a prescription string; never fails
    ///
    /// A range is two integers separated by a hyphen with `min <= max`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(count) = trimmed.parse::<u32>() {
            return Self::Fixed(count);
        }
        if let Some((low, high)) = trimmed.split_once('-') {
            if let (Ok(min), Ok(max)) = (low.trim().parse::<u32>(), high.trim().parse::<u32>()) {
                if min <= max {
                    return Self::Range { min, max };
                }
            }
        }
        Self::Descriptive(text.to_owned())
    }

    /// Shift both ends of a range by `by` reps; `None` when not a range
    #[must_use]
    pub const fn increased_range(&self, by: u32) -> Option<Self> {
        match self {
            Self::Range { min, max } => Some(Self::Range {
                min: min.saturating_add(by),
                max: max.saturating_add(by),
            }),
            Self::Fixed(_) | Self::Descriptive(_) => None,
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(f, "{count}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
            Self::Descriptive(text) => f.write_str(text),
        }
    }
}

impl From<Reps> for String {
    fn from(reps: Reps) -> Self {
        reps.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepsRepr {
    Count(u32),
    Text(String),
}

impl From<RepsRepr> for Reps {
    fn from(repr: RepsRepr) -> Self {
        match repr {
            RepsRepr::Count(count) => Self::Fixed(count),
            RepsRepr::Text(text) => Self::parse(&text),
        }
    }
}

/// Source of a guidance annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Progressive overload: add load
    IncreaseWeight,
    /// Progressive overload: add reps
    IncreaseReps,
    /// Progressive overload: back off
    ReduceIntensity,
    /// Recovery adjustment applied on read
    Recovery,
}

/// Annotation appended to an exercise's guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceNote {
    /// What produced the note
    pub kind: NoteKind,
    /// Rendered text
    pub text: String,
}

impl GuidanceNote {
    /// Create a note
    pub fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One prescribed exercise within a training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name, also the key for exercise log lookups
    pub name: String,
    /// Working sets
    pub sets: u32,
    /// Repetition prescription
    pub reps: Reps,
    /// Rest between sets (seconds)
    pub rest_seconds: u32,
    /// Effort level
    pub intensity_level: IntensityLevel,
    /// Base coaching guidance from the generator
    #[serde(default)]
    pub guidance: String,
    /// Notes appended by later pipeline stages, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<GuidanceNote>,
}

impl ExerciseEntry {
    /// Append an annotation; the base guidance is never modified
    pub fn annotate(&mut self, kind: NoteKind, text: impl Into<String>) {
        self.annotations.push(GuidanceNote::new(kind, text));
    }

    /// Base guidance followed by every annotation, separated by `" | "`
    #[must_use]
    pub fn rendered_guidance(&self) -> String {
        self.annotations
            .iter()
            .fold(self.guidance.clone(), |mut rendered, note| {
                if !rendered.is_empty() {
                    rendered.push_str(" | ");
                }
                rendered.push_str(&note.text);
                rendered
            })
    }

    /// Whether any annotation of `kind` is present
    #[must_use]
    pub fn has_note(&self, kind: NoteKind) -> bool {
        self.annotations.iter().any(|note| note.kind == kind)
    }
}

/// A single calendar day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day index 1-7
    pub day: u8,
    /// Calendar day name
    #[serde(default)]
    pub day_name: String,
    /// Whether this is a rest day
    pub rest_day: bool,
    /// Training focus label
    #[serde(default, rename = "type", alias = "day_type")]
    pub day_type: String,
    /// Ordered exercises; empty iff `rest_day`
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl DayPlan {
    /// Whether the rest-day flag agrees with the exercise list
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.rest_day == self.exercises.is_empty()
            && self
                .exercises
                .iter()
                .all(|exercise| !exercise.name.trim().is_empty() && exercise.sets > 0)
    }
}

/// Check a day array has exactly seven well-formed days numbered 1-7 in order
///
/// # Errors
///
/// Returns `InvalidPlanShape` describing the first violation found
pub fn validate_week_shape(days: &[DayPlan]) -> AppResult<()> {
    if days.len() != DAYS_PER_WEEK {
        return Err(AppError::invalid_plan_shape(format!(
            "expected {DAYS_PER_WEEK} days, got {}",
            days.len()
        )));
    }
    for (expected, day) in (1_u8..).zip(days) {
        if day.day != expected {
            return Err(AppError::invalid_plan_shape(format!(
                "day {expected} is numbered {}",
                day.day
            )));
        }
        if !day.is_well_formed() {
            return Err(AppError::invalid_plan_shape(format!(
                "day {expected} ({}) has rest_day={} with {} exercises",
                day.day_name,
                day.rest_day,
                day.exercises.len()
            )));
        }
    }
    Ok(())
}

/// Optional narrative carried through from whichever generator produced the days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanNarrative {
    /// One-line summary of the week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_summary: Option<String>,
    /// How this week progresses from the last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_notes: Option<String>,
    /// Recovery advice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_tips: Option<String>,
    /// Encouragement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation_message: Option<String>,
}

/// A week of training for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Owner
    pub user_id: Uuid,
    /// 1-based, user-scoped week counter
    pub week_number: u32,
    /// Goal the plan was generated for
    pub goal: Goal,
    /// Experience level the plan was generated for
    pub experience_level: ExperienceLevel,
    /// Recovery adjustment state
    #[serde(default)]
    pub fatigue_status: FatigueStatus,
    /// Seven days, day 1 first
    pub workouts: Vec<DayPlan>,
    /// Narrative fields
    #[serde(flatten)]
    pub narrative: PlanNarrative,
}

impl WorkoutPlan {
    /// Number of non-rest days
    #[must_use]
    pub fn training_day_count(&self) -> usize {
        self.workouts.iter().filter(|day| !day.rest_day).count()
    }

    /// Number of rest days
    #[must_use]
    pub fn rest_day_count(&self) -> usize {
        self.workouts.len() - self.training_day_count()
    }

    /// Distinct exercise names in the plan, sorted
    #[must_use]
    pub fn exercise_names(&self) -> BTreeSet<String> {
        self.workouts
            .iter()
            .flat_map(|day| day.exercises.iter().map(|exercise| exercise.name.clone()))
            .collect()
    }

    /// Iterate every exercise entry mutably
    pub fn exercises_mut(&mut self) -> impl Iterator<Item = &mut ExerciseEntry> {
        self.workouts
            .iter_mut()
            .flat_map(|day| day.exercises.iter_mut())
    }
}

/// A plan as returned by the plan store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlan {
    /// Store-assigned identifier
    pub id: Uuid,
    /// When the plan was saved
    pub created_at: DateTime<Utc>,
    /// The plan itself
    #[serde(flatten)]
    pub plan: WorkoutPlan,
}
