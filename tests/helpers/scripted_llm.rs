// ABOUTME: Scripted LLM provider for exercising the AI plan source without network access
// ABOUTME: Replies with canned text, an error, or after a delay; counts calls

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use async_trait::async_trait;
use fitplan::errors::AppError;
use fitplan::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use fitplan::plan_sources::{LlmPlanSource, LlmPlanSourceSettings, PlanRequest, TemplatePlanSource};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// What the provider does on every call
#[derive(Debug, Clone)]
pub enum Script {
    /// Return this text as the completion
    Reply(String),
    /// Fail with an upstream error
    Fail,
    /// Sleep before replying
    Stall(Duration),
}

/// Provider that follows a fixed script
pub struct ScriptedLlmProvider {
    script: Script,
    capabilities: LlmCapabilities,
    calls: AtomicUsize,
}

impl ScriptedLlmProvider {
    #[must_use]
    pub fn new(script: Script) -> Arc<Self> {
        Self::with_capabilities(
            script,
            LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_MESSAGES,
        )
    }

    #[must_use]
    pub fn with_capabilities(script: Script, capabilities: LlmCapabilities) -> Arc<Self> {
        Arc::new(Self {
            script,
            capabilities,
            calls: AtomicUsize::new(0),
        })
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = match &self.script {
            Script::Reply(text) => text.clone(),
            Script::Fail => {
                return Err(AppError::external_service("Scripted", "upstream unavailable"));
            }
            Script::Stall(delay) => {
                sleep(*delay).await;
                String::new()
            }
        };
        Ok(ChatResponse {
            content,
            model: "scripted-1".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }
}

/// AI source over a scripted provider with a short timeout
#[must_use]
pub fn ai_source(provider: Arc<ScriptedLlmProvider>) -> Arc<LlmPlanSource> {
    Arc::new(LlmPlanSource::new(
        provider,
        LlmPlanSourceSettings {
            timeout: Duration::from_millis(200),
            ..LlmPlanSourceSettings::default()
        },
    ))
}

/// A well-formed AI response: the template week for `request`, renamed and
/// wrapped in a markdown fence
#[must_use]
pub fn valid_ai_response(request: &PlanRequest, summary: &str) -> String {
    let mut days = TemplatePlanSource::default().build(request).days;
    for entry in days.iter_mut().flat_map(|day| day.exercises.iter_mut()) {
        entry.name = format!("AI {}", entry.name);
    }
    let body = json!({
        "weekly_schedule": days,
        "week_summary": summary,
        "recovery_tips": "Sleep eight hours",
    });
    format!("```json\n{body}\n```")
}
