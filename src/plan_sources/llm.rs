// ABOUTME: AI-backed plan source that prompts an LLM provider for a weekly plan
// ABOUTME: Bounds the call with a timeout and validates the response before returning it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_candidate, CandidatePlan, PlanRequest, PlanSource};
use crate::errors::{AppError, AppResult};
use crate::llm::prompts::WORKOUT_PLANNER_SYSTEM_PROMPT;
use crate::llm::{build_workout_plan_prompt, ChatMessage, ChatRequest, LlmProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Request settings for the AI source
#[derive(Debug, Clone)]
pub struct LlmPlanSourceSettings {
    /// Model override; `None` uses the provider default
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token limit
    pub max_tokens: u32,
    /// Upper bound on the whole call
    pub timeout: Duration,
}

impl Default for LlmPlanSourceSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            max_tokens: 4096,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Plan source backed by a chat-completion provider
pub struct LlmPlanSource {
    provider: Arc<dyn LlmProvider>,
    settings: LlmPlanSourceSettings,
}

impl LlmPlanSource {
    /// Create a source around a provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, settings: LlmPlanSourceSettings) -> Self {
        Self { provider, settings }
    }

    /// Chat request for one week
    ///
    /// Providers without a system role get the persona prepended to the user
    /// prompt instead.
    #[must_use]
    pub fn chat_request(&self, request: &PlanRequest) -> ChatRequest {
        let prompt = build_workout_plan_prompt(request);
        let capabilities = self.provider.capabilities();
        let messages = if capabilities.supports_system_messages() {
            vec![
                ChatMessage::system(WORKOUT_PLANNER_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{WORKOUT_PLANNER_SYSTEM_PROMPT}\n\n{prompt}"
            ))]
        };
        let mut chat = ChatRequest::new(messages)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);
        if let Some(model) = &self.settings.model {
            chat = chat.with_model(model.clone());
        }
        if capabilities.supports_json_mode() {
            chat = chat.with_json_mode();
        }
        chat
    }
}

#[async_trait]
impl PlanSource for LlmPlanSource {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    #[instrument(skip(self, request), fields(provider = self.provider.name(), user_id = %request.user_id, week = request.week_number))]
    async fn generate(&self, request: &PlanRequest) -> AppResult<CandidatePlan> {
        let chat = self.chat_request(request);
        debug!(
            model = chat.model.as_deref().unwrap_or_else(|| self.provider.default_model()),
            "Requesting AI plan"
        );
        let response = timeout(self.settings.timeout, self.provider.complete(&chat))
            .await
            .map_err(|_| {
                AppError::external_timeout(
                    self.provider.display_name(),
                    self.settings.timeout.as_secs(),
                )
                .with_user_id(request.user_id)
            })??;

        debug!(
            chars = response.content.len(),
            model = %response.model,
            total_tokens = response.usage.map(|usage| usage.total_tokens),
            "Received AI plan response"
        );
        if response.is_truncated() {
            warn!(
                max_tokens = self.settings.max_tokens,
                "AI plan response hit the token limit"
            );
        }
        parse_candidate(&response.content).map_err(|e| e.with_user_id(request.user_id))
    }
}
