//! Session and history-entry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable question/answer exchange within a session.
///
/// Entries are only ever appended to [`Session::history`]; nothing mutates
/// or removes them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The question text, or the chosen follow-up option text.
    pub question: String,

    /// Optional clarifiers supplied with the initial question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarifiers: Option<String>,

    /// Topic label active when the entry was produced.
    pub topic: String,

    /// Company label, when one was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Raw text returned by the AI provider, fences already stripped.
    pub answer_raw: String,

    /// Best-effort JSON substring extracted from `answer_raw`.
    /// May equal `answer_raw` when extraction found nothing parseable.
    pub answer_json: String,

    /// Entry creation time (UTC).
    pub ts: DateTime<Utc>,
}

/// A persisted conversation session.
///
/// `history` is append-only and preserves insertion order. `company` and
/// `last_topic` track the most recent classification, not the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Globally unique identifier, generated at creation.
    pub id: Uuid,

    /// Company label from the most recent classification, if any.
    pub company: Option<String>,

    /// Topic label from the most recent classification, if any.
    pub last_topic: Option<String>,

    /// Ordered exchange history, oldest first.
    pub history: Vec<HistoryEntry>,

    /// Session creation time (UTC).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates an empty session with a fresh random id.
    pub fn new(company: Option<String>, last_topic: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company,
            last_topic,
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the most recent history entry, if any.
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }
}
