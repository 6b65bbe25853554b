//! POST /query — answers a fresh question and opens a session.

use std::sync::Arc;

use advisor_core::{
    Answer, Topic, detect_company_from_text, detect_topic, extract_json, generate_options,
    prompts::build_answer_prompt,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use session_store::HistoryEntry;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::{
        MAX_SNIPPET_HITS,
        query::query_request::{QueryRequest, QueryResponse},
    },
};

/// Handler: POST /query
///
/// Fetches grounding snippets, classifies the question, asks Gemini for a
/// structured answer, opens a session with the first history entry, and
/// returns the answer plus six follow-up options.
///
/// A provider failure propagates as 500 before any session is created;
/// a search failure only costs grounding context.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/query \
///   -H 'content-type: application/json' \
///   -d '{"question":"Tell me about Google hiring"}'
/// ```
pub async fn query(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<QueryResponse>)> {
    let Json(body) = body?;
    let question = body.question.as_deref().unwrap_or("").trim().to_string();
    if question.is_empty() {
        return Err(AppError::BadRequest("question required".into()));
    }
    let clarifiers = body.clarifiers.unwrap_or_default();

    let snippets = state.search.fetch_text(&question, MAX_SNIPPET_HITS).await;

    let (topic, mut company) = detect_topic(&question, &snippets);
    if topic == Topic::Company && company.is_none() {
        company = detect_company_from_text(&snippets);
    }

    let prompt = build_answer_prompt(topic, &question, &clarifiers, &snippets, company.as_deref());
    let raw = state.llm.generate(&prompt).await?;
    let answer_json = extract_json(&raw);

    let session = state
        .store
        .create(company.clone(), Some(topic.as_str().to_string()))
        .await;
    let entry = HistoryEntry {
        question: question.clone(),
        clarifiers: Some(clarifiers).filter(|c| !c.is_empty()),
        topic: topic.as_str().to_string(),
        company: company.clone(),
        answer_raw: raw,
        answer_json: answer_json.clone(),
        ts: Utc::now(),
    };
    state.store.append(session.id, entry).await?;

    // Options are grounded on the company (or topic) rather than the question.
    let option_ctx = state
        .search
        .fetch_text(company.as_deref().unwrap_or(topic.as_str()), MAX_SNIPPET_HITS)
        .await;
    let options =
        generate_options(&state.llm, topic, company.as_deref(), &answer_json, &option_ctx).await;

    info!(session_id = %session.id, %topic, company = ?company, "query answered");

    Ok((
        StatusCode::CREATED,
        Json(QueryResponse {
            session_id: session.id,
            topic: topic.as_str().to_string(),
            company,
            answer: Answer::from_extracted(&answer_json),
            options,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::routes::test_support::{stub_state, test_state};

    #[tokio::test]
    async fn missing_question_is_bad_request() {
        let state = test_state();
        let body = QueryRequest {
            question: None,
            clarifiers: None,
        };
        let err = query(State(Arc::clone(&state)), Ok(Json(body)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(state.store.count().await, 0);
    }

    #[tokio::test]
    async fn blank_question_is_bad_request() {
        let state = test_state();
        let body = QueryRequest {
            question: Some("   ".into()),
            clarifiers: None,
        };
        let err = query(State(state), Ok(Json(body))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    // Happy path against a local Gemini stub. Search stays keyless, so this
    // also shows a degraded search still yields a full 201.
    #[tokio::test]
    async fn successful_query_opens_session_with_answer_and_options() {
        let canned = r#"{"summary": "overview", "options": ["a", "b", "c", "d", "e", "f"]}"#;
        let state = stub_state(canned).await;
        let body = QueryRequest {
            question: Some("Tell me about Google hiring".into()),
            clarifiers: None,
        };

        let (status, Json(resp)) = query(State(Arc::clone(&state)), Ok(Json(body)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(resp.topic, "company");
        assert_eq!(resp.company.as_deref(), Some("Google"));
        assert_eq!(resp.options, ["a", "b", "c", "d", "e", "f"]);
        assert!(matches!(resp.answer, Answer::Structured(_)));

        let session = state.store.get(resp.session_id).await.unwrap();
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history[0].question, "Tell me about Google hiring");
        assert_eq!(session.history[0].company.as_deref(), Some("Google"));
    }

    // Type errors in the body go through the fallible extractor and answer
    // 400, not axum's default 422.
    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = crate::router(test_state());
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"question\": 5}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    // Provider unreachable: the handler must fail upstream and leave no
    // half-created session behind.
    #[tokio::test]
    async fn provider_failure_creates_no_session() {
        let state = test_state();
        let body = QueryRequest {
            question: Some("Tell me about Google hiring".into()),
            clarifiers: None,
        };
        let err = query(State(Arc::clone(&state)), Ok(Json(body)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
        assert_eq!(state.store.count().await, 0);
    }
}
