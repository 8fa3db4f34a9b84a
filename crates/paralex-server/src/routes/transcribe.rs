use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use paralex_transcribe::{apply_correction, transcribe_upload};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

/// Transcribe an uploaded audio blob.
///
/// The credential is checked before the body is touched; a missing or
/// empty `file` field is rejected before any disk or network I/O. An
/// empty transcript (silence) is a successful response.
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let client = state.openai()?.clone();

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("recording.webm")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::BadRequest("no file provided".to_string()))?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("no audio data in upload".to_string()));
    }

    let raw = transcribe_upload(&client, &state.config.transcribe_options(), &filename, &bytes)
        .await?;

    let transcription = apply_correction(
        &client,
        state.config.correction,
        &state.config.chat_model,
        raw,
    )
    .await?;

    Ok(Json(TranscribeResponse { transcription }))
}
