//! Generative-model integration module

pub mod client;
pub mod prompts;
pub mod advisor;

pub use advisor::AdviceGenerator;
pub use client::{CompletionClient, GeminiClient, LlmError};
