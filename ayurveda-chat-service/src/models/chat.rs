use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Message returned when the request carries no usable question.
pub const NO_QUESTION_MESSAGE: &str = "No question provided";

/// Body of `POST /api/ayurveda-chat`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(
        required(message = "No question provided"),
        custom(function = "non_blank")
    )]
    pub question: Option<String>,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
        }
    }
}

fn non_blank(question: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed(NO_QUESTION_MESSAGE));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Ayurveda Chatbot API is running".to_string(),
        }
    }
}
