//! Best-effort recovery of a JSON object from model output.
//!
//! The provider is instructed to emit strict JSON but is not trusted to.
//! Extraction tries the outermost brace slice first, then a fence-stripped
//! greedy regex, and finally passes the input through unchanged — callers
//! must treat the result as "may not be valid JSON", which is what the
//! [`Answer`] union encodes.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

static BRACE_SPAN: OnceLock<Regex> = OnceLock::new();

fn brace_span() -> &'static Regex {
    // Greedy multi-line span from first `{` to last `}`.
    BRACE_SPAN.get_or_init(|| Regex::new(r"(?s)(\{.*\})").expect("valid regex"))
}

/// Extracts a syntactically valid JSON object substring from `raw`.
///
/// Strategy:
/// 1. slice from the first `{` to the last `}` and keep it if it parses;
/// 2. strip backtick fences and take the greedy `{...}` regex span;
/// 3. give up and return the input unchanged.
pub fn extract_json(raw: &str) -> String {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            let candidate = &raw[start..=end];
            if serde_json::from_str::<Value>(candidate).is_ok() {
                return candidate.to_string();
            }
        }
    }

    let cleaned = raw.replace("```", "");
    if let Some(m) = brace_span().captures(&cleaned) {
        return m[1].to_string();
    }

    raw.to_string()
}

/// An AI answer as handed to API consumers.
///
/// The provider's output is not schema-validated, so downstream code must
/// handle both shapes explicitly: a parsed JSON object when extraction
/// succeeded, or the raw text when it did not.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Answer {
    /// Extraction produced a parseable JSON object.
    Structured(Map<String, Value>),
    /// Extraction failed; the text passes through as-is.
    Raw(String),
}

impl Answer {
    /// Builds an answer from extracted text, falling back to `Raw` when the
    /// text is not a JSON object.
    pub fn from_extracted(extracted: &str) -> Answer {
        match serde_json::from_str::<Value>(extracted) {
            Ok(Value::Object(map)) => Answer::Structured(map),
            _ => Answer::Raw(extracted.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_between_noise_is_sliced_out() {
        let out = extract_json("noise {\"a\":1} noise");
        assert_eq!(out, "{\"a\":1}");
        assert_eq!(
            serde_json::from_str::<Value>(&out).unwrap(),
            serde_json::json!({"a": 1})
        );
    }

    #[test]
    fn no_braces_passes_through_unchanged() {
        assert_eq!(extract_json("just plain text"), "just plain text");
    }

    #[test]
    fn fenced_object_sliced_out() {
        let raw = "```json\n{\"a\": {\"b\": 2}}\n```";
        let out = extract_json(raw);
        assert_eq!(
            serde_json::from_str::<Value>(&out).unwrap(),
            serde_json::json!({"a": {"b": 2}})
        );
    }

    // The regex fallback does not re-validate: a span that still fails to
    // parse is returned as-is and surfaces downstream as a Raw answer.
    #[test]
    fn fallback_span_returned_without_validation() {
        let raw = "prefix {\"a\": 1} and a stray } brace";
        let out = extract_json(raw);
        assert_eq!(out, "{\"a\": 1} and a stray }");
        assert_eq!(Answer::from_extracted(&out), Answer::Raw(out.clone()));
    }

    #[test]
    fn nested_object_with_trailing_noise() {
        let raw = "Sure! {\"a\": [1, 2], \"b\": {\"c\": \"d\"}} hope that helps";
        let out = extract_json(raw);
        assert_eq!(
            serde_json::from_str::<Value>(&out).unwrap(),
            serde_json::json!({"a": [1, 2], "b": {"c": "d"}})
        );
    }

    #[test]
    fn unparseable_braces_pass_through() {
        let raw = "{not json at all";
        assert_eq!(extract_json(raw), raw);
    }

    #[test]
    fn answer_union_covers_both_shapes() {
        assert_eq!(
            Answer::from_extracted("{\"a\":1}"),
            Answer::Structured(
                serde_json::from_str::<Map<String, Value>>("{\"a\":1}").unwrap()
            )
        );
        assert_eq!(
            Answer::from_extracted("oops"),
            Answer::Raw("oops".to_string())
        );
        // Valid JSON but not an object still counts as raw text.
        assert_eq!(
            Answer::from_extracted("[1,2]"),
            Answer::Raw("[1,2]".to_string())
        );
    }
}
