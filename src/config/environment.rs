// ABOUTME: Environment configuration for AI plan generation
// ABOUTME: Reads the Groq API key, model, timeout, and sampling settings and builds the primary source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the AI plan source
//!
//! This is the only place the planner inspects the environment for AI
//! settings; business logic receives an already-built [`PlanSource`].

use crate::errors::AppResult;
use crate::llm::GroqProvider;
use crate::plan_sources::{LlmPlanSource, LlmPlanSourceSettings, PlanSource};
use fitplan_intelligence::ConfigError;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Settings for the optional AI plan source
#[derive(Debug, Clone, PartialEq)]
pub struct PlanGenerationConfig {
    /// Groq API key; `None` disables AI generation
    pub groq_api_key: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// Upper bound on one AI call
    pub ai_timeout: Duration,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token limit
    pub max_tokens: u32,
}

impl Default for PlanGenerationConfig {
    fn default() -> Self {
        let settings = LlmPlanSourceSettings::default();
        Self {
            groq_api_key: None,
            model: None,
            ai_timeout: settings.timeout,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

impl PlanGenerationConfig {
    /// Environment variable holding the Groq API key
    pub const API_KEY_ENV: &'static str = "GROQ_API_KEY";
    /// Environment variable selecting the model
    pub const MODEL_ENV: &'static str = "FITPLAN_LLM_MODEL";
    /// Environment variable for the AI call timeout in seconds
    pub const TIMEOUT_ENV: &'static str = "FITPLAN_AI_TIMEOUT_SECS";
    /// Environment variable for the sampling temperature
    pub const TEMPERATURE_ENV: &'static str = "FITPLAN_AI_TEMPERATURE";
    /// Environment variable for the completion token limit
    pub const MAX_TOKENS_ENV: &'static str = "FITPLAN_AI_MAX_TOKENS";
    /// Sample value shipped in example env files; treated as unset
    pub const PLACEHOLDER_API_KEY: &'static str = "your_groq_api_key_here";

    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable does not parse or
    /// is out of range
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self {
            groq_api_key: env::var(Self::API_KEY_ENV)
                .ok()
                .and_then(|raw| normalize_api_key(&raw)),
            model: env::var(Self::MODEL_ENV)
                .ok()
                .map(|model| model.trim().to_owned())
                .filter(|model| !model.is_empty()),
            ..Self::default()
        };

        let mut timeout_secs = config.ai_timeout.as_secs();
        apply_env_var(Self::TIMEOUT_ENV, &mut timeout_secs)?;
        config.ai_timeout = Duration::from_secs(timeout_secs);
        apply_env_var(Self::TEMPERATURE_ENV, &mut config.temperature)?;
        apply_env_var(Self::MAX_TOKENS_ENV, &mut config.max_tokens)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate numeric settings
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero timeout, zero token limit, or
    /// a temperature outside 0-2
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_timeout.is_zero() {
            return Err(ConfigError::ValueOutOfRange("AI timeout must be positive"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValueOutOfRange(
                "AI temperature must be between 0 and 2",
            ));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::ValueOutOfRange("AI max tokens must be positive"));
        }
        Ok(())
    }

    /// Whether an AI source can be built
    #[must_use]
    pub const fn ai_enabled(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Request settings for the AI source
    #[must_use]
    pub fn source_settings(&self) -> LlmPlanSourceSettings {
        LlmPlanSourceSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: self.ai_timeout,
        }
    }

    /// Build the primary plan source, or `None` when AI is not configured
    #[must_use]
    pub fn build_primary_source(&self) -> Option<Arc<dyn PlanSource>> {
        let Some(api_key) = &self.groq_api_key else {
            info!("Groq AI not configured, using template-based workout generation");
            return None;
        };
        let mut provider = GroqProvider::new(api_key.clone());
        if let Some(model) = &self.model {
            provider = provider.with_default_model(model.clone());
        }
        info!(timeout_secs = self.ai_timeout.as_secs(), "Groq AI plan generation enabled");
        Some(Arc::new(LlmPlanSource::new(
            Arc::new(provider),
            self.source_settings(),
        )))
    }
}

/// Treat blank and placeholder keys as unset
#[must_use]
pub fn normalize_api_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    (!key.is_empty() && key != PlanGenerationConfig::PLACEHOLDER_API_KEY).then(|| key.to_owned())
}

fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
    }
    Ok(())
}
