//! # GSM8K Tree-of-Thought Evaluator
//!
//! Evaluates a language model's arithmetic word-problem reasoning on the
//! GSM8K benchmark against a local Ollama instance, using two strategies:
//!
//! - **Baseline**: a single-shot prompt per question, scored on exact match
//!   of the normalized numeric answer.
//! - **Tree of Thought**: bounded breadth-first expansion of candidate
//!   reasoning branches, scored on membership of the ground truth in the
//!   accumulated candidate-answer set.
//!
//! ## Architecture
//!
//! ```text
//! CLI → Eval loop → Strategy (baseline | tot) → Ollama /api/chat (HTTP)
//! ```
//!
//! Both strategies share one [`CompletionService`] implementation; the
//! Tree-of-Thought explorer owns an arena-backed [`ThoughtTree`] that grows
//! during expansion and is never pruned (an optional top-k frontier policy
//! bounds the *frontier*, not the tree).
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gsm8k_tot_eval::{Config, OllamaClient, TreeOfThought};
//! use gsm8k_tot_eval::ollama::CompletionService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = OllamaClient::new(&config.ollama, config.request.clone())?;
//!     let service: Arc<dyn CompletionService> = Arc::new(client);
//!     let mut tot = TreeOfThought::new(service, "2+2?", config.search.clone())?;
//!     let candidates = tot.run().await;
//!     println!("{:?}", candidates);
//!     Ok(())
//! }
//! ```
//!
//! [`CompletionService`]: ollama::CompletionService
//! [`ThoughtTree`]: strategies::ThoughtTree

#![warn(missing_docs)]

/// Configuration management for the evaluator.
pub mod config;
/// GSM8K dataset loading.
pub mod dataset;
/// Error types and result aliases for the application.
pub mod error;
/// Evaluation loop and report generation.
pub mod eval;
/// Ollama API client and the completion service abstraction.
pub mod ollama;
/// Prompt templates sent to the completion service.
pub mod prompts;
/// Evaluation strategies (baseline and Tree of Thought).
pub mod strategies;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use eval::EvalReport;
pub use ollama::OllamaClient;
pub use strategies::{Baseline, TreeOfThought};
