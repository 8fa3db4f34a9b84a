//! Follow-up suggestion generation.
//!
//! Asks the model for four next actions as JSON. The model's output is
//! structurally untrusted: anything that is not exactly four complete
//! suggestion objects falls back to the fixed default set, so a malformed
//! upstream response can never crash or corrupt the UI.

use paralex_core::models::{default_suggestions, Suggestion};
use paralex_openai::{ChatRequest, OpenAiClient, WireMessage};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChatError;

const SUGGESTION_TEMPERATURE: f32 = 0.7;
const EXPECTED_SUGGESTIONS: usize = 4;

/// One {role, content} pair of the conversation being summarized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionTurn {
    pub role: String,
    pub content: String,
}

/// Generate the next suggestion set for a conversation.
///
/// An empty conversation yields the default set without a network call.
/// Upstream failures propagate; malformed upstream *content* does not.
pub async fn generate_suggestions(
    client: &OpenAiClient,
    model: &str,
    conversation: &[SuggestionTurn],
) -> Result<Vec<Suggestion>, ChatError> {
    if conversation.is_empty() {
        return Ok(default_suggestions());
    }

    let prompt = build_prompt(conversation);
    let request = ChatRequest::new(model, vec![WireMessage::text("system", prompt)])
        .with_temperature(SUGGESTION_TEMPERATURE);

    let completion = client.chat_completion(&request).await?;
    let content = completion.first_text().unwrap_or_default();

    match parse_suggestions(content) {
        Some(suggestions) => Ok(suggestions),
        None => {
            warn!(
                content_len = content.len(),
                "model returned unusable suggestions, serving defaults"
            );
            Ok(default_suggestions())
        }
    }
}

fn build_prompt(conversation: &[SuggestionTurn]) -> String {
    let serialized = serde_json::to_string(conversation).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Based on the following conversation, suggest four next possible \
         actions a user might want to take. Provide the suggestions as a \
         JSON array of objects with \"title\", \"label\", and \"action\" \
         fields. Return only the JSON array.\n\nConversation:\n{serialized}\n\nSuggestions:"
    )
}

/// Parse and shape-check the model's output: exactly four objects, each
/// with non-empty title, label, and action strings. Returns `None` on any
/// violation.
pub fn parse_suggestions(content: &str) -> Option<Vec<Suggestion>> {
    let json = strip_code_fence(content);
    let suggestions: Vec<Suggestion> = serde_json::from_str(json).ok()?;

    if suggestions.len() != EXPECTED_SUGGESTIONS {
        return None;
    }
    let complete = suggestions
        .iter()
        .all(|s| !s.title.is_empty() && !s.label.is_empty() && !s.action.is_empty());
    complete.then_some(suggestions)
}

/// Models often wrap JSON in a markdown fence despite instructions.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
