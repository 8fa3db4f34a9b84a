pub mod conversation;
pub mod message;
pub mod suggestion;
pub mod tool;

pub use conversation::Conversation;
pub use message::{ChatRole, Message, MessageContent};
pub use suggestion::{default_suggestions, Suggestion};
pub use tool::ToolName;
