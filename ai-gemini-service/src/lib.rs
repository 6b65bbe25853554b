//! Thin client crate for the Gemini `generateContent` REST API.
//!
//! One provider, one operation: render a prompt, get back the text of the
//! first candidate's first part, with markdown code fences stripped.
//! Errors are normalized via the unified types in [`error_handler`].

pub mod config;
pub mod error_handler;
pub mod gemini_service;

pub use config::gemini_config::GeminiConfig;
pub use error_handler::AiGeminiError;
pub use gemini_service::GeminiService;
