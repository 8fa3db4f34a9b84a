use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use paralex_chat::ChatError;
use paralex_openai::OpenAiError;
use paralex_transcribe::TranscribeError;

/// Unified API error type for all route handlers.
///
/// Everything is converted to a structured `{ "error": ... }` body at the
/// request boundary; upstream bodies and local failure detail are logged
/// server-side and never forwarded to clients.
#[derive(Debug)]
pub enum ApiError {
    /// The upstream credential is missing from the environment.
    Configuration,
    /// Missing or invalid client input; the message is safe to forward.
    BadRequest(String),
    /// Local processing (transcoding, temp I/O, parsing) failed.
    ProcessingFailed(String),
    /// The hosted API returned a non-success or unusable response.
    UpstreamFailed { status: Option<u16>, detail: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Configuration => {
                tracing::error!("upstream API credential is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server is not configured for this operation".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ProcessingFailed(detail) => {
                tracing::error!(%detail, "request processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to process the request".to_string(),
                )
            }
            ApiError::UpstreamFailed { status, detail } => {
                tracing::error!(upstream_status = ?status, %detail, "upstream API call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "the hosted AI service returned an error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<OpenAiError> for ApiError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::Upstream { status, body } => ApiError::UpstreamFailed {
                status: Some(status),
                detail: body,
            },
            OpenAiError::Http(e) => ApiError::UpstreamFailed {
                status: None,
                detail: e.to_string(),
            },
            OpenAiError::Parse(detail) => ApiError::UpstreamFailed {
                status: None,
                detail,
            },
            OpenAiError::Io(e) => ApiError::ProcessingFailed(e.to_string()),
        }
    }
}

impl From<TranscribeError> for ApiError {
    fn from(e: TranscribeError) -> Self {
        match e {
            TranscribeError::EmptyUpload => {
                ApiError::BadRequest("no audio data in upload".to_string())
            }
            TranscribeError::Io(e) => ApiError::ProcessingFailed(e.to_string()),
            TranscribeError::Transcode(detail) => ApiError::ProcessingFailed(detail),
            TranscribeError::Upstream(e) => e.into(),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Upstream(e) => e.into(),
            other => ApiError::ProcessingFailed(other.to_string()),
        }
    }
}
