// ABOUTME: Validation and normalization of AI-generated weekly plans
// ABOUTME: Strips markdown fences, parses JSON, and rejects any malformed week outright
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CandidatePlan, PlanSourceKind};
use crate::errors::{AppError, AppResult};
use fitplan_core::constants::week::{day_name, REST_DAY_TYPE};
use fitplan_core::models::{validate_week_shape, DayPlan, PlanNarrative};
use serde_json::Value;

/// Remove a surrounding markdown code fence (```json ... ``` or ``` ... ```)
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_prefix("json").unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse an AI response into a candidate week
///
/// The response must be a JSON object whose `weekly_schedule` holds exactly
/// seven well-formed days numbered 1-7. Blank day names are filled from the
/// day index and rest days without a label get the rest-day label. Any other
/// problem rejects the whole response.
///
/// # Errors
///
/// Returns `InvalidFormat` for unparseable JSON or a day that does not
/// deserialize, and `InvalidPlanShape` for a week of the wrong shape
pub fn parse_candidate(text: &str) -> AppResult<CandidatePlan> {
    let value: Value = serde_json::from_str(strip_code_fences(text))
        .map_err(|e| AppError::invalid_format(format!("AI response is not JSON: {e}")))?;

    let schedule = value
        .get("weekly_schedule")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::invalid_format("AI response has no weekly_schedule array"))?;

    let mut days = schedule
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<DayPlan>(entry.clone()).map_err(|e| {
                AppError::invalid_format(format!("weekly_schedule[{index}] is invalid: {e}"))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    for day in &mut days {
        if day.day_name.trim().is_empty() {
            day.day_name = day_name(day.day);
        }
        if day.rest_day && day.day_type.trim().is_empty() {
            REST_DAY_TYPE.clone_into(&mut day.day_type);
        }
    }
    validate_week_shape(&days)?;

    let text_field = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    };

    Ok(CandidatePlan {
        days,
        narrative: PlanNarrative {
            week_summary: text_field("week_summary"),
            progression_notes: text_field("progression_notes"),
            recovery_tips: text_field("recovery_tips"),
            motivation_message: text_field("motivation_message"),
        },
        source: PlanSourceKind::Ai,
    })
}
