use super::providers::ProviderError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("No question provided")]
    MissingQuestion,

    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Failed to process question: {0}")]
    Provider(#[from] ProviderError),
}

// Bodies that arrive but do not parse are a 400; buffering failures such as
// the body limit keep the extractor's status.
impl From<JsonRejection> for ChatError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => StatusCode::BAD_REQUEST,
            other => other.status(),
        };

        ChatError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MissingQuestion => AppError::BadRequest(anyhow::anyhow!(err.to_string())),
            ChatError::InvalidBody { status, .. } if status == StatusCode::BAD_REQUEST => {
                AppError::BadRequest(anyhow::anyhow!(err.to_string()))
            }
            ChatError::InvalidBody { status, .. } => {
                AppError::RequestRejected(status, err.to_string())
            }
            ChatError::Provider(_) => AppError::UpstreamFailure(err.to_string()),
        }
    }
}
