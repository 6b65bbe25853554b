use advisor_core::Answer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The user's question. Required; validated in the handler so an
    /// absent field yields the same 400 as an empty one.
    #[serde(default)]
    pub question: Option<String>,

    /// Free-text clarifiers appended to the prompt.
    #[serde(default)]
    pub clarifiers: Option<String>,
}

/// Body of the 201 response to `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub session_id: Uuid,
    pub topic: String,
    pub company: Option<String>,
    /// Parsed JSON object when extraction succeeded, raw text otherwise.
    pub answer: Answer,
    pub options: Vec<String>,
}
