//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum MockOutcome {
    Answer(String),
    Failure(String),
}

/// Mock text provider that returns a canned outcome and records prompts.
pub struct MockTextProvider {
    outcome: MockOutcome,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Always answers with `answer`.
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Answer(answer.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Failure(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.outcome {
            MockOutcome::Answer(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockOutcome::Failure(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
