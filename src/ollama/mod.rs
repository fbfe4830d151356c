//! Ollama API client and the completion service abstraction.
//!
//! The [`CompletionService`] trait is the single seam between the evaluation
//! strategies and the model: one free-text prompt in, the model's full text
//! response out. [`OllamaClient`] is the production implementation; tests
//! substitute in-memory stubs.

mod client;
mod types;

pub use client::OllamaClient;
pub use types::{ChatRequest, ChatResponse, Message, MessageRole};

use async_trait::async_trait;

use crate::error::CompletionResult;

/// Text-completion collaborator shared by all evaluation strategies.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send a single-turn prompt and return the model's full text response.
    ///
    /// All conversational history must be embedded in the prompt by the
    /// caller; the service keeps no state between calls.
    async fn generate(&self, prompt: &str) -> CompletionResult<String>;
}
