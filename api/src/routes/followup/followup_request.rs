use advisor_core::Answer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /followup`.
///
/// Exactly one of `option_index` (1-based, into the freshly regenerated
/// options list) or `custom` (free-text follow-up) must be provided.
#[derive(Debug, Deserialize)]
pub struct FollowupRequest {
    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub option_index: Option<i64>,

    #[serde(default)]
    pub custom: Option<String>,
}

/// Body of the 200 response to `POST /followup`.
#[derive(Debug, Serialize)]
pub struct FollowupResponse {
    pub session_id: Uuid,
    /// Parsed JSON object when extraction succeeded, raw text otherwise.
    pub answer: Answer,
    pub options: Vec<String>,
}
