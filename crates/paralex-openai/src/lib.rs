//! paralex-openai
//!
//! Client for the OpenAI-compatible upstream: chat completions (buffered
//! and SSE-streamed) and audio transcriptions. This crate owns the wire
//! format and SSE decoding; policy (prompts, tools, retries-or-not) lives
//! with the callers.

pub mod client;
pub mod error;
pub mod models;
pub mod sse;
pub mod stream;

pub use client::OpenAiClient;
pub use error::OpenAiError;
pub use models::{ChatCompletion, ChatRequest, ToolDefinition, WireMessage};
pub use stream::{ChatStream, StreamEvent};
