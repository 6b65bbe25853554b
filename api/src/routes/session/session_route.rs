//! GET /session/{id} — full persisted session record.

use std::sync::Arc;

use axum::{Json, extract::Path, extract::State};
use session_store::Session;
use uuid::Uuid;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// Handler: GET /session/{id}
///
/// Returns the whole record: id, company, last_topic, ordered history, and
/// creation timestamp.
pub async fn session_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Session>> {
    let id = Uuid::parse_str(id.trim()).map_err(|_| AppError::NotFound)?;
    let session = state.store.get(id).await?;
    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::test_state;

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let state = test_state();
        let err = session_detail(State(state), Path(Uuid::new_v4().to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn stored_session_is_returned_whole() {
        let state = test_state();
        let s = state
            .store
            .create(Some("Google".into()), Some("company".into()))
            .await;

        let Json(fetched) = session_detail(State(state), Path(s.id.to_string()))
            .await
            .unwrap();
        assert_eq!(fetched.id, s.id);
        assert_eq!(fetched.company.as_deref(), Some("Google"));
        assert_eq!(fetched.last_topic.as_deref(), Some("company"));
        assert!(fetched.history.is_empty());
    }
}
