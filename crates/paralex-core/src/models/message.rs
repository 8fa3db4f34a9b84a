use serde::{Deserialize, Serialize};

use super::tool::ToolName;

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    Tool,
}

/// The payload of a message: plain text, a model-initiated tool call, or
/// the locally resolved result of that call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: String },
    ToolCall {
        id: String,
        name: ToolName,
        arguments: serde_json::Value,
    },
    ToolResult {
        id: String,
        name: ToolName,
        result: String,
    },
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: MessageContent,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message {
            role: ChatRole::User,
            content: MessageContent::Text { text: text.into() },
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message {
            role: ChatRole::Assistant,
            content: MessageContent::Text { text: text.into() },
        }
    }

    /// The assistant-side record of a model-initiated tool call.
    pub fn tool_call(id: impl Into<String>, name: ToolName, arguments: serde_json::Value) -> Self {
        Message {
            role: ChatRole::Assistant,
            content: MessageContent::ToolCall {
                id: id.into(),
                name,
                arguments,
            },
        }
    }

    /// The tool-side record of the locally resolved result.
    pub fn tool_result(id: impl Into<String>, name: ToolName, result: impl Into<String>) -> Self {
        Message {
            role: ChatRole::Tool,
            content: MessageContent::ToolResult {
                id: id.into(),
                name,
                result: result.into(),
            },
        }
    }

    /// The plain text of this message, if it carries any.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text { text } => Some(text),
            _ => None,
        }
    }
}
