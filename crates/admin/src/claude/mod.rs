//! Claude API integration for AI-generated marketing copy.
//!
//! Only the non-streaming Messages API is used: the dashboard sends a single
//! user prompt and reads back the text blocks of the reply.

mod client;
mod error;
mod types;

pub use client::ClaudeClient;
pub use error::{ClaudeError, ErrorDetail, ErrorEnvelope};
pub use types::{ChatRequest, ChatResponse, ContentBlock, Message, Role, StopReason, Usage};
