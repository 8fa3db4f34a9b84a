//! Conversion from domain conversation records to the upstream wire form.

use paralex_core::models::{ChatRole, Conversation, Message, MessageContent};
use paralex_openai::models::{FunctionCallPayload, ToolCallPayload};
use paralex_openai::WireMessage;

/// The assistant persona, kept from the product's original voice.
pub const SYSTEM_PROMPT: &str = "\
You are an AI paralegal assistant. You are friendly, approachable, and \
conversational while remaining professional. For example:
- If the user asks \"How are you?\", respond warmly, like \"I'm doing great! \
Thanks for asking. How about you?\".
- If the user thanks you, reply with \"You're very welcome! Let me know if \
there's anything else I can help with.\"
- Always maintain a tone that feels human, empathetic, and approachable \
while assisting with legal needs.";

/// Flatten a conversation into wire messages, system prompt first.
pub fn to_wire_messages(conversation: &Conversation) -> Vec<WireMessage> {
    let mut wire = Vec::with_capacity(conversation.len() + 1);
    wire.push(WireMessage::text("system", SYSTEM_PROMPT));
    wire.extend(conversation.messages().iter().map(to_wire_message));
    wire
}

fn to_wire_message(message: &Message) -> WireMessage {
    let role = match message.role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
        ChatRole::Tool => "tool",
    };

    match &message.content {
        MessageContent::Text { text } => WireMessage::text(role, text.clone()),
        MessageContent::ToolCall { id, name, arguments } => WireMessage {
            role: role.to_string(),
            content: None,
            tool_calls: Some(vec![ToolCallPayload {
                id: id.clone(),
                kind: "function".to_string(),
                function: FunctionCallPayload {
                    name: name.as_str().to_string(),
                    arguments: arguments.to_string(),
                },
            }]),
            tool_call_id: None,
        },
        MessageContent::ToolResult { id, result, .. } => WireMessage {
            role: role.to_string(),
            content: Some(result.clone()),
            tool_calls: None,
            tool_call_id: Some(id.clone()),
        },
    }
}
