//! In-memory session store.
//!
//! Keeps whole sessions in a `RwLock<HashMap>`. Construct once, wrap in
//! `Arc`, and pass clones to dependents (same pattern as any shared service
//! in this workspace).

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{HistoryEntry, Session, StoreError};

/// Process-local session storage keyed by session id.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session with an empty history and persists it.
    ///
    /// Returns a snapshot of the stored session.
    pub async fn create(&self, company: Option<String>, last_topic: Option<String>) -> Session {
        let session = Session::new(company, last_topic);
        debug!(session_id = %session.id, topic = ?session.last_topic, "session created");
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Appends one entry to a session's history.
    ///
    /// The append runs under the store's write lock, so concurrent appends
    /// to the same session serialize and none is lost. The session-level
    /// `company`/`last_topic` are refreshed from the entry so they always
    /// reflect the most recent classification.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no session exists under `id`.
    pub async fn append(&self, id: Uuid, entry: HistoryEntry) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        session.last_topic = Some(entry.topic.clone());
        if entry.company.is_some() {
            session.company = entry.company.clone();
        }
        session.history.push(entry);

        debug!(session_id = %id, history_len = session.history.len(), "history appended");
        Ok(session.clone())
    }

    /// Number of sessions currently stored.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Fetches a snapshot of a session.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no session exists under `id`.
    pub async fn get(&self, id: Uuid) -> Result<Session, StoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;

    fn entry(question: &str) -> HistoryEntry {
        HistoryEntry {
            question: question.to_string(),
            clarifiers: None,
            topic: "general".to_string(),
            company: None,
            answer_raw: "{}".to_string(),
            answer_json: "{}".to_string(),
            ts: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let store = MemorySessionStore::new();
        let s = store
            .create(Some("Google".into()), Some("company".into()))
            .await;

        let fetched = store.get(s.id).await.unwrap();
        assert_eq!(fetched.id, s.id);
        assert_eq!(fetched.company.as_deref(), Some("Google"));
        assert_eq!(fetched.last_topic.as_deref(), Some("company"));
        assert!(fetched.history.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = MemorySessionStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn append_preserves_order_and_prior_entries() {
        let store = MemorySessionStore::new();
        let s = store.create(None, Some("general".into())).await;

        for i in 0..5 {
            store.append(s.id, entry(&format!("q{i}"))).await.unwrap();
        }

        let fetched = store.get(s.id).await.unwrap();
        assert_eq!(fetched.history.len(), 5);
        for (i, e) in fetched.history.iter().enumerate() {
            assert_eq!(e.question, format!("q{i}"));
        }
    }

    #[tokio::test]
    async fn append_refreshes_last_topic_and_company() {
        let store = MemorySessionStore::new();
        let s = store.create(None, Some("general".into())).await;

        let mut e = entry("tell me about google");
        e.topic = "company".into();
        e.company = Some("Google".into());
        store.append(s.id, e).await.unwrap();

        let fetched = store.get(s.id).await.unwrap();
        assert_eq!(fetched.last_topic.as_deref(), Some("company"));
        assert_eq!(fetched.company.as_deref(), Some("Google"));
    }

    #[tokio::test]
    async fn append_to_unknown_session_is_not_found() {
        let store = MemorySessionStore::new();
        let err = store.append(Uuid::new_v4(), entry("q")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    // Two "follow-ups" appending at once: both entries must land, in some
    // order, with neither lost (last-write-wins applies to reads, not writes).
    #[tokio::test]
    async fn concurrent_appends_both_land() {
        let store = Arc::new(MemorySessionStore::new());
        let s = store.create(None, None).await;

        let (a, b) = tokio::join!(
            {
                let store = Arc::clone(&store);
                async move { store.append(s.id, entry("a")).await }
            },
            {
                let store = Arc::clone(&store);
                async move { store.append(s.id, entry("b")).await }
            }
        );
        a.unwrap();
        b.unwrap();

        let fetched = store.get(s.id).await.unwrap();
        assert_eq!(fetched.history.len(), 2);
    }
}
