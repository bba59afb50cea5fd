// ABOUTME: Plan source abstraction for producing a candidate week of workouts
// ABOUTME: AI-backed and template-backed sources behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Sources
//!
//! A [`PlanSource`] turns a [`PlanRequest`] into a [`CandidatePlan`]. The
//! workout plan service holds an optional primary source and always keeps a
//! [`TemplatePlanSource`] as the fallback.

/// Validation and normalization of AI responses
pub mod candidate;
/// AI-backed source
pub mod llm;
/// Template-backed source
pub mod template;

pub use candidate::parse_candidate;
pub use llm::{LlmPlanSource, LlmPlanSourceSettings};
pub use template::TemplatePlanSource;

use crate::errors::AppResult;
use async_trait::async_trait;
use fitplan_core::models::{
    ActivityLevel, DayPlan, ExperienceLevel, Goal, PlanNarrative, Profile,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a source needs to produce a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Owner
    pub user_id: Uuid,
    /// Week being generated
    pub week_number: u32,
    /// Training goal
    pub goal: Goal,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Free-text injuries or limitations
    pub injuries_limitations: String,
    /// Effective training days
    pub training_days: u8,
}

impl PlanRequest {
    /// Build a request from a profile and the effective training days
    #[must_use]
    pub fn from_profile(profile: &Profile, week_number: u32, training_days: u8) -> Self {
        Self {
            user_id: profile.user_id,
            week_number,
            goal: profile.goal,
            experience_level: profile.experience_level,
            activity_level: profile.activity_level,
            injuries_limitations: profile.injuries_limitations.clone(),
            training_days,
        }
    }
}

/// Which kind of source produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSourceKind {
    /// External generative model
    Ai,
    /// Built-in rule-based template
    Template,
}

impl PlanSourceKind {
    /// Lowercase label for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Template => "template",
        }
    }
}

/// Unvalidated week produced by a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePlan {
    /// Day entries in order
    pub days: Vec<DayPlan>,
    /// Narrative supplied by the source
    pub narrative: PlanNarrative,
    /// Producer
    pub source: PlanSourceKind,
}

/// Produces candidate weeks
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// Produce a candidate week
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable, times out, or returns
    /// something that is not a well-formed week
    async fn generate(&self, request: &PlanRequest) -> AppResult<CandidatePlan>;
}
