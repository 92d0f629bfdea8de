//! mentor-client - Explanation client for Code Mentor
//!
//! Turns a raw code snippet into a [`CodeExplanation`](mentor_core::CodeExplanation)
//! by prompting a generative-AI backend with a response schema and validating
//! the JSON it returns.
//!
//! ## Public API
//!
//! - [`Explainer`] - The seam the application layer depends on
//! - [`ExplanationClient`] - `Explainer` over any [`Backend`]
//! - [`Backend`] - One prompt + schema in, one text payload out
//! - [`GeminiBackend`] - `Backend` over the Gemini `generateContent` REST API
//! - [`ClientConfig`], [`ApiKey`] - Construction-time configuration

pub mod backend;
pub mod client;
pub mod config;
pub mod gemini;
pub mod prompt;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{Backend, BackendError, LocalBackend};
pub use client::{parse_explanation, Explainer, ExplanationClient, LocalExplainer};
pub use config::{ApiKey, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use gemini::GeminiBackend;
