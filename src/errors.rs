// ABOUTME: Error types for the plan synthesis pipeline
// ABOUTME: Re-exports the shared AppError taxonomy from fitplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! [`AppError`] lives in `fitplan-core` so the intelligence crate and this
//! crate share one taxonomy.

pub use fitplan_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
