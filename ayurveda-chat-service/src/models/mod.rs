//! Wire models for the chat service.

pub mod chat;

pub use chat::{ChatRequest, ChatResponse, HealthResponse, NO_QUESTION_MESSAGE};
