//! tenlessons-providers — LLM completion backends.
//!
//! Implements the `CompletionProvider` trait for OpenAI-compatible
//! chat-completion endpoints, plus a mock provider for tests.

pub mod mock;
pub mod openai;

pub use mock::MockProvider;
pub use openai::OpenAiProvider;
