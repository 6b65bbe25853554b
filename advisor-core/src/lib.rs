//! Question understanding and answer shaping for the advisor backend.
//!
//! Public API, leaf-first:
//! - [`topics`]: keyword/company topic classification
//! - [`prompts`]: strict-JSON prompt templates per topic
//! - [`json_extract`]: best-effort JSON recovery from model output
//! - [`options`]: AI-generated follow-up options with a fixed fallback

pub mod json_extract;
pub mod options;
pub mod prompts;
pub mod topics;

pub use json_extract::{Answer, extract_json};
pub use options::generate_options;
pub use topics::{Topic, detect_company_from_text, detect_topic};
