use async_trait::async_trait;
use relay_core::{Llm, LlmRequest, LlmResponse, RelayError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// An [`Llm`] that replays scripted replies in order and records every request.
///
/// Once the script runs out, further calls fail with [`RelayError::Model`].
pub struct MockLlm {
    name: String,
    script: Mutex<VecDeque<Result<LlmResponse>>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: LlmResponse) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queue a single-text reply.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(LlmResponse::text(text))
    }

    /// Queue a failing call.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.push(Err(RelayError::Model(message.into())));
        self
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn push(&self, entry: Result<LlmResponse>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse> {
        let model = req.model.clone();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req);
        }

        let next = self
            .script
            .lock()
            .map_err(|_| RelayError::Model("mock script lock poisoned".to_string()))?
            .pop_front();

        next.unwrap_or_else(|| {
            Err(RelayError::Model(format!(
                "mock '{}' has no reply left for model={model}",
                self.name
            )))
        })
    }
}
