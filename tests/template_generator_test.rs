// ABOUTME: Integration tests for the rule-based template week generator and training day selection
// ABOUTME: Week shape for every profile combination, injury filtering, and activity adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan::models::{
    validate_week_shape, ActivityLevel, ExperienceLevel, FatigueStatus, Goal,
};
use fitplan_core::constants::week::REST_DAY_TYPE;
use fitplan_intelligence::exercise_catalog::is_contraindicated;
use fitplan_intelligence::{Limitation, TemplateGenerator, TemplateRequest, TrainingDaySelector};

const GOALS: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance];
const LEVELS: [ExperienceLevel; 3] = [
    ExperienceLevel::Beginner,
    ExperienceLevel::Intermediate,
    ExperienceLevel::Advanced,
];
const ACTIVITY: [ActivityLevel; 5] = [
    ActivityLevel::Sedentary,
    ActivityLevel::Light,
    ActivityLevel::Moderate,
    ActivityLevel::Active,
    ActivityLevel::VeryActive,
];

fn request(
    goal: Goal,
    experience_level: ExperienceLevel,
    activity_level: ActivityLevel,
    injuries: &str,
    training_days: u8,
) -> TemplateRequest<'_> {
    TemplateRequest {
        goal,
        experience_level,
        activity_level,
        fatigue_status: FatigueStatus::Normal,
        injuries,
        training_days,
        week_number: 1,
    }
}

#[test]
fn test_every_combination_yields_seven_days_with_requested_rest() {
    let generator = TemplateGenerator::default();
    for goal in GOALS {
        for level in LEVELS {
            for activity in ACTIVITY {
                for days in 1..=7_u8 {
                    let week = generator.generate(&request(goal, level, activity, "", days));
                    validate_week_shape(&week.days).unwrap();
                    let rest = week.days.iter().filter(|day| day.rest_day).count();
                    assert_eq!(rest, 7 - usize::from(days), "{goal} {level} {activity} {days}");
                    assert!(week
                        .days
                        .iter()
                        .filter(|day| day.rest_day)
                        .all(|day| day.day_type == REST_DAY_TYPE));
                }
            }
        }
    }
}

#[test]
fn test_no_duplicate_exercises_within_a_day() {
    let generator = TemplateGenerator::default();
    for days in 1..=7_u8 {
        let week = generator.generate(&request(
            Goal::WeightLoss,
            ExperienceLevel::Advanced,
            ActivityLevel::Moderate,
            "bad knees, shoulder impingement",
            days,
        ));
        for day in &week.days {
            let mut names: Vec<&str> = day.exercises.iter().map(|e| e.name.as_str()).collect();
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before, "day {}", day.day);
        }
    }
}

#[test]
fn test_injury_filter_excludes_and_is_idempotent() {
    let injuries = "Lower back pain from a disc issue and a sore left knee";
    let limitations = Limitation::parse_all(injuries);
    assert!(limitations.contains(&Limitation::LowerBack));
    assert!(limitations.contains(&Limitation::Knee));

    let generator = TemplateGenerator::default();
    for level in LEVELS {
        let req = request(Goal::MuscleGain, level, ActivityLevel::Active, injuries, 4);
        let first = generator.generate(&req);
        let second = generator.generate(&req);
        assert_eq!(first.days, second.days);

        for entry in first.days.iter().flat_map(|day| day.exercises.iter()) {
            assert!(
                !is_contraindicated(&entry.name, &limitations),
                "{} should be filtered",
                entry.name
            );
        }
        assert!(first
            .days
            .iter()
            .flat_map(|day| day.exercises.iter())
            .any(|entry| entry.guidance.contains("Substituted for")));
        assert!(first
            .narrative
            .week_summary
            .as_deref()
            .unwrap()
            .contains("(Modified for:"));
    }
}

#[test]
fn test_progression_note_only_in_first_week() {
    let generator = TemplateGenerator::default();
    let mut req = request(
        Goal::Maintenance,
        ExperienceLevel::Beginner,
        ActivityLevel::Light,
        "",
        3,
    );
    assert!(generator.generate(&req).narrative.progression_notes.is_some());
    req.week_number = 2;
    assert!(generator.generate(&req).narrative.progression_notes.is_none());
}

#[test]
fn test_training_day_selection_table() {
    let selector = TrainingDaySelector::default();
    assert_eq!(selector.select(Some(5), ActivityLevel::Sedentary), 3);
    assert_eq!(selector.select(Some(2), ActivityLevel::Sedentary), 2);
    assert_eq!(selector.select(Some(3), ActivityLevel::Active), 4);
    assert_eq!(selector.select(Some(6), ActivityLevel::Active), 6);
    assert_eq!(selector.select(Some(5), ActivityLevel::Moderate), 5);
    assert_eq!(selector.select(None, ActivityLevel::Light), 4);
}
