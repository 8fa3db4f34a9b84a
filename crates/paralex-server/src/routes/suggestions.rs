use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use paralex_chat::{generate_suggestions, SuggestionTurn};
use paralex_core::models::Suggestion;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SuggestionsRequest {
    pub conversation: Option<Vec<SuggestionTurn>>,
}

/// Generate four follow-up suggestions for the current conversation.
///
/// Always answers with exactly four complete suggestion objects: the
/// model's when they validate, the default set otherwise. An empty
/// conversation is served from the defaults without an upstream call.
pub async fn suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionsRequest>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    let conversation = req
        .conversation
        .ok_or_else(|| ApiError::BadRequest("conversation data is required".to_string()))?;

    if conversation.is_empty() {
        return Ok(Json(paralex_core::models::default_suggestions()));
    }

    let client = state.openai()?;
    let suggestions =
        generate_suggestions(client, &state.config.chat_model, &conversation).await?;

    Ok(Json(suggestions))
}
