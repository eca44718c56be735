//! LLM Module
//!
//! Chat completion access for field structuring and risk narratives.
//! Callers depend on [`CompletionProvider`]; [`OpenAiClient`] talks to any
//! OpenAI-compatible `/chat/completions` endpoint.

mod client;
pub mod prompt;
mod types;

pub use client::{CompletionProvider, OpenAiClient, TEMPERATURE};
pub use types::{ChatMessage, ChatRequest, ChatResponse, LlmError};
