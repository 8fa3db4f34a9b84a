use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;
use super::tool::ToolName;

/// An in-memory chat session between a user and the assistant.
///
/// Mutation is append-only: messages are pushed in turn order and never
/// edited or removed, so the record always reflects what actually happened
/// even if a turn was cut short mid-stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Conversation {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            messages: Vec::new(),
        }
    }

    /// Rebuild a conversation from messages round-tripped through a client.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Conversation {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            messages,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Record a tool call and its result as one exchange, so a call record
    /// is never left without its matching result.
    pub fn push_tool_exchange(
        &mut self,
        call_id: impl Into<String>,
        name: ToolName,
        arguments: serde_json::Value,
        result: impl Into<String>,
    ) {
        let call_id = call_id.into();
        self.messages
            .push(Message::tool_call(call_id.clone(), name, arguments));
        self.messages.push(Message::tool_result(call_id, name, result));
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
