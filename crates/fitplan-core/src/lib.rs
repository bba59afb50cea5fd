// ABOUTME: Core types for the fitplan personal-training planner
// ABOUTME: Foundation crate with error handling, domain models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing the shared vocabulary of the planner: user profiles,
//! weekly workout plans, exercise and daily logs, and the unified error type.
//! Both the intelligence crate and the service layer depend on it, so it changes
//! rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Profile, plan, and log data structures
//! - **constants**: Labels and fixed values shared across crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain models (profiles, workout plans, logs)
pub mod models;

/// Shared constants (day names, narrative templates)
pub mod constants;
