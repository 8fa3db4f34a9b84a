//! Optional grammar-correction pass over raw transcripts.

use paralex_openai::{ChatRequest, OpenAiClient, WireMessage};
use tracing::warn;

use crate::error::TranscribeError;

const CORRECTION_PROMPT: &str =
    "Fix the grammar and punctuation of the transcript. Return only the corrected text.";

/// How the correction stage behaves, chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMode {
    /// Skip the stage entirely.
    Off,
    /// Attempt correction; on failure keep the raw transcript.
    #[default]
    Fallback,
    /// Attempt correction; a failure fails the request.
    Strict,
}

impl CorrectionMode {
    /// Parse a configuration value. Unknown values are `None` so the
    /// caller can report the bad setting.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "off" => Some(CorrectionMode::Off),
            "fallback" => Some(CorrectionMode::Fallback),
            "strict" => Some(CorrectionMode::Strict),
            _ => None,
        }
    }
}

/// Apply the configured correction mode to a raw transcript.
pub async fn apply_correction(
    client: &OpenAiClient,
    mode: CorrectionMode,
    model: &str,
    raw: String,
) -> Result<String, TranscribeError> {
    if mode == CorrectionMode::Off || raw.is_empty() {
        return Ok(raw);
    }

    match correct_transcript(client, model, &raw).await {
        Ok(corrected) => Ok(corrected),
        Err(e) => match mode {
            CorrectionMode::Fallback => {
                warn!(error = %e, "transcript correction failed, keeping raw transcript");
                Ok(raw)
            }
            _ => Err(e),
        },
    }
}

/// One chat-completion call at low creativity with the fixed instruction.
async fn correct_transcript(
    client: &OpenAiClient,
    model: &str,
    raw: &str,
) -> Result<String, TranscribeError> {
    let request = ChatRequest::new(
        model,
        vec![
            WireMessage::text("system", CORRECTION_PROMPT),
            WireMessage::text("user", raw),
        ],
    )
    .with_temperature(0.2);

    let completion = client.chat_completion(&request).await?;

    // A missing or empty choice means the model gave us nothing usable;
    // callers decide whether that is fatal via the mode.
    match completion.first_text() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Ok(raw.to_string()),
    }
}
