use crate::{Result, types::Content};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A text-generation backend.
///
/// One implementation may serve many model identifiers; the model to use is
/// carried by each [`LlmRequest`].
#[async_trait]
pub trait Llm: Send + Sync {
    fn name(&self) -> &str;
    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub contents: Vec<Content>,
    pub config: Option<GenerateContentConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Option<Content>,
    pub usage_metadata: Option<UsageMetadata>,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: i32,
    pub candidates_token_count: i32,
    pub total_token_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, contents: Vec<Content>) -> Self {
        Self { model: model.into(), contents, config: None }
    }

    /// Set the generation config.
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Text of the first `"system"` content, if present.
    pub fn system_text(&self) -> Option<&str> {
        self.contents.iter().filter(|c| c.role == "system").find_map(Content::first_text)
    }

    /// Text of the last `"user"` content, if present.
    pub fn user_text(&self) -> Option<&str> {
        self.contents.iter().rev().filter(|c| c.role == "user").find_map(Content::first_text)
    }
}

impl LlmResponse {
    pub fn new(content: Content) -> Self {
        Self {
            content: Some(content),
            usage_metadata: None,
            finish_reason: Some(FinishReason::Stop),
        }
    }

    /// Convenience constructor for a single-text model reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::new("model").with_text(text))
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Content::first_text)
    }
}
