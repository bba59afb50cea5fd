// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Scripted LLM providers and repositories that fail on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod failing_repositories;
pub mod scripted_llm;
