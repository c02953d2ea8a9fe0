use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse};
use crate::services::{build_prompt, metrics, ChatError};
use crate::startup::AppState;
use service_core::error::AppError;

/// `POST /api/ayurveda-chat`: answer one question through the text provider.
#[tracing::instrument(skip(state, payload))]
pub async fn ayurveda_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected chat request body");
        ChatError::from(rejection)
    })?;

    request.validate().map_err(|errors| {
        tracing::debug!(error = %errors, "Chat request failed validation");
        ChatError::MissingQuestion
    })?;
    let question = request.question.as_deref().unwrap_or_default();

    let prompt = build_prompt(question);
    let provider = state.text_provider.name();

    tracing::info!(
        provider,
        question_len = question.len(),
        "Forwarding question to text provider"
    );

    match state.text_provider.generate(&prompt).await {
        Ok(response) => {
            metrics::record_provider_call(provider, "ok");
            tracing::info!(
                provider,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                finish_reason = ?response.finish_reason,
                "Question answered"
            );

            Ok(Json(ChatResponse {
                answer: response.text,
            }))
        }
        Err(e) => {
            metrics::record_provider_call(provider, e.kind());
            tracing::error!(provider, error = %e, "Failed to process question");

            Err(ChatError::Provider(e).into())
        }
    }
}
