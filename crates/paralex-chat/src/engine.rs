//! One conversational turn: user text in, streamed tokens or a tool view
//! out, with the history mutated append-only along the way.

use paralex_core::models::Conversation;
use paralex_openai::{ChatRequest, OpenAiClient, StreamEvent};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::ChatError;
use crate::tools::{resolve_tool_call, tool_definitions, ToolRendering};
use crate::wire::{to_wire_messages, SYSTEM_PROMPT};

const CHAT_TEMPERATURE: f32 = 0.8;

/// An event delivered to the caller while a turn runs.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A fragment of streamed assistant text.
    Token { text: String },
    /// A canned tool view; replaces token streaming for this turn.
    Tool { rendering: ToolRendering },
    /// The turn finished normally.
    Done,
    /// The turn failed; carries a client-safe message. Emitted by callers
    /// at the request boundary, never by the engine itself.
    Error { message: String },
}

/// Accumulates the fragments of one streamed tool call.
#[derive(Debug, Default)]
struct ToolCallBuilder {
    id: Option<String>,
    name: Option<String>,
    arguments: String,
}

/// The conversational engine. History is an explicit argument everywhere:
/// a turn is a function of (history, new message), not of ambient state.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    client: OpenAiClient,
    model: String,
}

impl ChatEngine {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        ChatEngine {
            client,
            model: model.into(),
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Run one turn.
    ///
    /// The user message is appended to `conversation` before the upstream
    /// call is issued, so a disconnect mid-stream never loses the user's
    /// own words. Events flow through `events`; a closed channel means the
    /// caller went away, and the turn stops early while still leaving the
    /// partial assistant text in the record.
    pub async fn send_message(
        &self,
        conversation: &mut Conversation,
        text: &str,
        events: mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError> {
        conversation.push_user(text);

        let request = ChatRequest::new(&self.model, to_wire_messages(conversation))
            .with_temperature(CHAT_TEMPERATURE)
            .with_tools(tool_definitions());

        let mut stream = self.client.chat_completion_stream(&request).await?;

        let mut reply = String::new();
        let mut tool_call: Option<ToolCallBuilder> = None;
        let mut finish_reason: Option<String> = None;

        while let Some(event) = stream.next_event().await? {
            match event {
                StreamEvent::Token(token) => {
                    reply.push_str(&token);
                    if events.send(ChatEvent::Token { text: token }).await.is_err() {
                        warn!("caller disconnected mid-stream, stopping generation");
                        break;
                    }
                }
                StreamEvent::ToolCallDelta {
                    index,
                    id,
                    name,
                    arguments_fragment,
                } => {
                    // Only the first declared call is resolved; the model
                    // is given one tool per turn in practice.
                    if index == 0 {
                        let builder = tool_call.get_or_insert_with(ToolCallBuilder::default);
                        if let Some(id) = id {
                            builder.id.get_or_insert(id);
                        }
                        if let Some(name) = name {
                            builder.name.get_or_insert(name);
                        }
                        builder.arguments.push_str(&arguments_fragment);
                    }
                }
                StreamEvent::Finished(reason) => {
                    finish_reason = reason;
                }
            }
        }

        if finish_reason.as_deref() == Some("tool_calls") {
            let builder = tool_call.ok_or(ChatError::IncompleteToolCall)?;
            return self.finish_tool_turn(conversation, builder, &events).await;
        }

        if !reply.is_empty() {
            conversation.push_assistant(reply);
        }

        let _ = events.send(ChatEvent::Done).await;
        Ok(())
    }

    async fn finish_tool_turn(
        &self,
        conversation: &mut Conversation,
        builder: ToolCallBuilder,
        events: &mpsc::Sender<ChatEvent>,
    ) -> Result<(), ChatError> {
        let name = builder.name.ok_or(ChatError::IncompleteToolCall)?;
        let call_id = builder
            .id
            .unwrap_or_else(|| format!("call_{}", uuid::Uuid::new_v4().simple()));

        let resolution = resolve_tool_call(&name, &builder.arguments)?;

        info!(tool = %resolution.name, "resolved tool call");

        conversation.push_tool_exchange(
            call_id,
            resolution.name,
            resolution.arguments,
            resolution.record_result,
        );

        let _ = events
            .send(ChatEvent::Tool {
                rendering: resolution.rendering,
            })
            .await;
        let _ = events.send(ChatEvent::Done).await;
        Ok(())
    }
}
