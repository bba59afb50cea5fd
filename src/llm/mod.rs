// ABOUTME: Chat-completion contract between the AI plan source and a hosted model
// ABOUTME: Message, request, and response types plus the provider trait and capability flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! The planner asks a hosted model for one week at a time: a system prompt
//! describing the trainer persona, one user prompt with the athlete's
//! profile, and a single non-streaming completion back.
//!
//! ```rust,no_run
//! use fitplan::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a certified personal trainer."),
//!         ChatMessage::user("Design a 3-day beginner week."),
//!     ])
//!     .with_json_mode();
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod groq;
pub mod prompts;

pub use groq::GroqProvider;
pub use prompts::build_workout_plan_prompt;

use crate::errors::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Request features a provider honours
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Can be forced to answer with a single JSON object
        const JSON_MODE = 0b0000_0001;
        /// Accepts a separate system message
        const SYSTEM_MESSAGES = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Whether JSON-object output can be requested
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Whether the system prompt can be sent as its own message
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

/// Sender of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions that frame the conversation
    System,
    /// The planner's prompt
    User,
}

impl MessageRole {
    /// Wire name in OpenAI-style APIs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// One message of a chat completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender
    pub role: MessageRole,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// System message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// User message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Messages in order
    pub messages: Vec<ChatMessage>,
    /// Model override; `None` means the provider default
    pub model: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Completion token limit
    pub max_tokens: Option<u32>,
    /// Ask for a single JSON object
    pub json_mode: bool,
}

impl ChatRequest {
    /// Request with default sampling settings
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            json_mode: false,
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the completion length
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request JSON-only output
    #[must_use]
    pub const fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// Completion returned by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Token accounting, when reported
    pub usage: Option<TokenUsage>,
    /// Why generation stopped ("stop", "length", ...)
    pub finish_reason: Option<String>,
}

impl ChatResponse {
    /// Whether the provider stopped at the token limit
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some("length")
    }
}

/// Token accounting for one completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// Hosted chat-completion provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short identifier used in logs (e.g., "groq")
    fn name(&self) -> &'static str;

    /// Name used in user-facing error messages
    fn display_name(&self) -> &'static str;

    /// Request features this provider honours
    fn capabilities(&self) -> LlmCapabilities;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Run one completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
