//! AI-generated follow-up options with a fixed fallback.
//!
//! The option list is decoration, not load-bearing: a provider hiccup must
//! never fail the surrounding request. [`generate_options`] therefore
//! absorbs every failure (network, malformed JSON, missing or empty field)
//! into [`FALLBACK_OPTIONS`]. Parsing sits in a pure helper so the fallback
//! logic is testable without a provider.

use ai_gemini_service::GeminiService;
use serde_json::Value;
use tracing::warn;

use crate::{json_extract::extract_json, prompts::build_options_prompt, topics::Topic};

/// Generic options served whenever generation fails.
pub const FALLBACK_OPTIONS: [&str; 6] = [
    "Give more details",
    "Explain step-by-step",
    "Provide real examples",
    "Show latest related updates",
    "Compare alternatives",
    "Suggest next recommended actions",
];

/// The fallback list as owned strings.
pub fn fallback_options() -> Vec<String> {
    FALLBACK_OPTIONS.iter().map(|s| s.to_string()).collect()
}

/// Asks the model for six topic-relevant follow-up questions.
///
/// Never fails: any provider or parse problem yields the fixed fallback
/// list, with a `warn!` so degraded responses are visible in traces.
pub async fn generate_options(
    llm: &GeminiService,
    topic: Topic,
    company: Option<&str>,
    previous_json: &str,
    snippets: &str,
) -> Vec<String> {
    let prompt = build_options_prompt(topic, company, previous_json, snippets);

    let raw = match llm.generate(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, %topic, "option generation failed, serving fallback");
            return fallback_options();
        }
    };

    match options_from_response(&raw) {
        Some(options) => options,
        None => {
            warn!(%topic, "option response unparseable, serving fallback");
            fallback_options()
        }
    }
}

/// Parses `{"options": [...]}` out of raw model output.
///
/// Returns `None` when the JSON cannot be recovered, the `options` field is
/// missing or not an array of strings, or the list is empty.
pub fn options_from_response(raw: &str) -> Option<Vec<String>> {
    let extracted = extract_json(raw);
    let value: Value = serde_json::from_str(&extracted).ok()?;

    let options: Vec<String> = value
        .get("options")?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    if options.is_empty() { None } else { Some(options) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_response_parses() {
        let raw = r#"{"options": ["a", "b", "c", "d", "e", "f"]}"#;
        let options = options_from_response(raw).unwrap();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], "a");
    }

    #[test]
    fn fenced_response_parses() {
        let raw = "```json\n{\"options\": [\"one\", \"two\"]}\n```";
        // Fences are already stripped by the AI client, but extraction copes
        // with them arriving anyway.
        assert_eq!(
            options_from_response(raw),
            Some(vec!["one".to_string(), "two".to_string()])
        );
    }

    #[test]
    fn malformed_or_missing_field_yields_none() {
        assert!(options_from_response("no json here").is_none());
        assert!(options_from_response(r#"{"answers": ["a"]}"#).is_none());
        assert!(options_from_response(r#"{"options": "not a list"}"#).is_none());
        assert!(options_from_response(r#"{"options": []}"#).is_none());
    }

    #[test]
    fn fallback_has_exactly_six_entries() {
        assert_eq!(fallback_options().len(), 6);
    }
}
