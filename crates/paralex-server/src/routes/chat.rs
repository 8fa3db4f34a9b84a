use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use axum::Json;
use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use paralex_chat::{ChatEngine, ChatEvent};
use paralex_core::models::{Conversation, Message};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    /// Prior history, round-tripped through the client. The server holds
    /// no conversation state between requests.
    #[serde(default)]
    pub conversation: Vec<Message>,
    pub message: String,
}

/// Run one conversational turn, streamed back as SSE events (`token`,
/// `tool`, `done`, `error`).
///
/// The turn runs in a spawned task writing to a bounded channel; if the
/// client disconnects the receiver drops and generation stops best-effort.
/// The user message is recorded in the history before the upstream call is
/// issued, so a disconnect never loses it.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }
    let client = state.openai()?.clone();

    let engine = ChatEngine::new(client, state.config.chat_model.clone());
    let mut conversation = Conversation::from_messages(req.conversation);

    let (tx, rx) = mpsc::channel::<ChatEvent>(32);
    tokio::spawn(async move {
        if let Err(e) = engine.send_message(&mut conversation, &req.message, tx.clone()).await {
            tracing::error!(error = %e, "chat turn failed");
            let _ = tx
                .send(ChatEvent::Error {
                    message: "Error processing response.".to_string(),
                })
                .await;
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| {
        let name = match &event {
            ChatEvent::Token { .. } => "token",
            ChatEvent::Tool { .. } => "tool",
            ChatEvent::Done => "done",
            ChatEvent::Error { .. } => "error",
        };
        let sse_event = Event::default()
            .event(name)
            .json_data(&event)
            .unwrap_or_else(|_| Event::default().event("error").data("{}"));
        Ok(sse_event)
    });

    Ok(Sse::new(stream))
}
