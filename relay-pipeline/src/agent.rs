//! Single-turn inference agent.

use crate::config::StageConfig;
use relay_core::{Content, GenerateContentConfig, Llm, LlmRequest, RelayError, Result, clean_text};
use relay_telemetry::model_call_span;
use std::sync::Arc;
use tracing::{Instrument, debug};

/// Model identifier and optional system instruction. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    model_id: String,
    system_instruction: Option<String>,
}

impl AgentConfig {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self { model_id: model_id.into(), system_instruction: None }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }
}

impl From<&StageConfig> for AgentConfig {
    fn from(stage: &StageConfig) -> Self {
        Self {
            model_id: stage.model_id.clone(),
            system_instruction: stage.system_instruction.clone(),
        }
    }
}

/// Sends one system + user request and returns the cleaned reply text.
pub struct InferenceAgent {
    llm: Arc<dyn Llm>,
    config: AgentConfig,
    generation: Option<GenerateContentConfig>,
}

impl InferenceAgent {
    pub fn new(
        llm: Arc<dyn Llm>,
        config: AgentConfig,
        generation: Option<GenerateContentConfig>,
    ) -> Self {
        Self { llm, config, generation }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model_id(&self) -> &str {
        self.config.model_id()
    }

    fn build_request(&self, user_text: &str) -> LlmRequest {
        let mut contents = Vec::with_capacity(2);
        let instruction = self.config.system_instruction().filter(|s| !s.trim().is_empty());
        if let Some(instruction) = instruction {
            contents.push(Content::new("system").with_text(instruction));
        }
        contents.push(Content::new("user").with_text(user_text));

        let request = LlmRequest::new(self.config.model_id(), contents);
        match &self.generation {
            Some(generation) => request.with_config(generation.clone()),
            None => request,
        }
    }

    /// Run one request. The first text block of the reply is returned after [`clean_text`].
    pub async fn run(&self, user_text: &str) -> Result<String> {
        if user_text.trim().is_empty() {
            return Err(RelayError::InvalidInput("user text must not be empty".to_string()));
        }

        let request = self.build_request(user_text);
        let span = model_call_span(self.config.model_id());
        let response = self.llm.generate_content(request).instrument(span).await?;

        let text = response.first_text().ok_or_else(|| RelayError::EmptyResponse {
            model: self.config.model_id().to_string(),
        })?;

        let cleaned = clean_text(text);
        debug!(
            model = %self.config.model_id(),
            raw_chars = text.chars().count(),
            cleaned_chars = cleaned.len(),
            "model reply received"
        );
        Ok(cleaned)
    }
}
