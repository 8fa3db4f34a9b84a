//! paralex-chat
//!
//! The conversational engine: append-only history mutation, token
//! streaming, the three canned legal tools, and follow-up suggestion
//! generation with shape validation.

pub mod engine;
pub mod error;
pub mod suggest;
pub mod tools;
pub mod wire;

pub use engine::{ChatEngine, ChatEvent};
pub use error::ChatError;
pub use suggest::{generate_suggestions, SuggestionTurn};
pub use tools::ToolRendering;
