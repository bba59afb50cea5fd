// ABOUTME: Prompt templates for AI-generated workout plans
// ABOUTME: System prompt loaded at compile time plus a per-user request prompt builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Plan Prompts
//!
//! The system prompt lives in a markdown file so the JSON contract can be
//! edited without touching code.

use crate::plan_sources::PlanRequest;
use fitplan_core::constants::week::DAYS_PER_WEEK;

/// System prompt describing the JSON contract for a weekly plan
pub const WORKOUT_PLANNER_SYSTEM_PROMPT: &str = include_str!("workout_planner_system.md");

/// Build the user prompt for one week of one user's plan
#[must_use]
pub fn build_workout_plan_prompt(request: &PlanRequest) -> String {
    let injuries = request.injuries_limitations.trim();
    let injuries = if injuries.is_empty() { "None" } else { injuries };
    let rest_days = DAYS_PER_WEEK.saturating_sub(usize::from(request.training_days));

    format!(
        "Create week {week} of a training program.\n\
         \n\
         Client profile:\n\
         - Goal: {goal}\n\
         - Experience level: {experience}\n\
         - Daily activity level: {activity}\n\
         - Injuries or limitations: {injuries}\n\
         \n\
         Schedule exactly {days} training days and {rest_days} rest days across the 7-day week.\n\
         Match sets, reps, and rest periods to the goal and experience level.",
        week = request.week_number,
        goal = request.goal,
        experience = request.experience_level,
        activity = request.activity_level,
        days = request.training_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::{ActivityLevel, ExperienceLevel, Goal};
    use uuid::Uuid;

    #[test]
    fn test_prompt_mentions_profile_and_day_counts() {
        let request = PlanRequest {
            user_id: Uuid::new_v4(),
            week_number: 2,
            goal: Goal::WeightLoss,
            experience_level: ExperienceLevel::Beginner,
            activity_level: ActivityLevel::Moderate,
            injuries_limitations: "  ".to_owned(),
            training_days: 4,
        };
        let prompt = build_workout_plan_prompt(&request);
        assert!(prompt.contains("week 2"));
        assert!(prompt.contains("Goal: Weight Loss"));
        assert!(prompt.contains("Injuries or limitations: None"));
        assert!(prompt.contains("exactly 4 training days and 3 rest days"));
    }

    #[test]
    fn test_system_prompt_describes_weekly_schedule() {
        assert!(WORKOUT_PLANNER_SYSTEM_PROMPT.contains("weekly_schedule"));
    }
}
