// ABOUTME: Template-backed plan source wrapping the rule-based week generator
// ABOUTME: Always available; used directly when no AI is configured and as the fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CandidatePlan, PlanRequest, PlanSource, PlanSourceKind};
use crate::errors::AppResult;
use async_trait::async_trait;
use fitplan_core::models::FatigueStatus;
use fitplan_intelligence::{TemplateGenerator, TemplateRequest};

/// Rule-based plan source
#[derive(Debug, Clone, Default)]
pub struct TemplatePlanSource {
    generator: TemplateGenerator,
}

impl TemplatePlanSource {
    /// Create a source around a configured generator
    #[must_use]
    pub const fn new(generator: TemplateGenerator) -> Self {
        Self { generator }
    }

    /// Generate synchronously; never fails
    #[must_use]
    pub fn build(&self, request: &PlanRequest) -> CandidatePlan {
        let week = self.generator.generate(&TemplateRequest {
            goal: request.goal,
            experience_level: request.experience_level,
            activity_level: request.activity_level,
            fatigue_status: FatigueStatus::Normal,
            injuries: &request.injuries_limitations,
            training_days: request.training_days,
            week_number: request.week_number,
        });
        CandidatePlan {
            days: week.days,
            narrative: week.narrative,
            source: PlanSourceKind::Template,
        }
    }
}

#[async_trait]
impl PlanSource for TemplatePlanSource {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, request: &PlanRequest) -> AppResult<CandidatePlan> {
        Ok(self.build(request))
    }
}
