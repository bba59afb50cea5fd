// ABOUTME: Weekly adherence score from exercise log completion outcomes
// ABOUTME: Completed counts fully, partial counts half, skipped counts nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::{CompletionStatus, ExerciseLog};

/// Percentage credit for a single logged exercise
const fn completion_credit(status: CompletionStatus) -> u64 {
    match status {
        CompletionStatus::Completed => 100,
        CompletionStatus::Partial => 50,
        CompletionStatus::Skipped => 0,
    }
}

/// Average completion credit across `logs`, rounded half up (0 with no logs)
#[must_use]
pub fn weekly_adherence(logs: &[ExerciseLog]) -> u8 {
    let Ok(count) = u64::try_from(logs.len()) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let total: u64 = logs
        .iter()
        .map(|log| completion_credit(log.completion_status))
        .sum();
    // Integer rounding: (2 * total + count) / (2 * count) == round(total / count)
    let rounded = (2 * total + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(100)
}
