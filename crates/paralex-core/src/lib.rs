//! paralex-core
//!
//! Pure domain types for the legal-assistant backend: messages,
//! conversations, tools, and follow-up suggestions. No HTTP, no upstream
//! client — this is the shared vocabulary of the Paralex system.

pub mod error;
pub mod models;
