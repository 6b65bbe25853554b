//! POST /followup — expands one follow-up within an existing session.
//!
//! Index selection re-generates the options list before resolving the
//! index, so the option text the user saw may differ from the one expanded
//! when the model answers differently between calls. Clients that need a
//! stable selection should send the option text via `custom` instead.

use std::sync::Arc;

use advisor_core::{
    Answer, Topic, extract_json, generate_options, prompts::build_followup_prompt,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use session_store::HistoryEntry;
use tracing::info;
use uuid::Uuid;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::{
        MAX_SNIPPET_HITS,
        followup::followup_request::{FollowupRequest, FollowupResponse},
    },
};

/// Handler: POST /followup
///
/// Loads the session (404 before any AI call if unknown), resolves the
/// follow-up text, expands it against the previous answer, appends a new
/// history entry, and returns the expansion plus a fresh options list.
pub async fn followup(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FollowupRequest>, JsonRejection>,
) -> AppResult<Json<FollowupResponse>> {
    let Json(body) = body?;
    let sid = body
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("session_id required".into()))?;
    let sid = Uuid::parse_str(sid).map_err(|_| AppError::NotFound)?;

    let session = state.store.get(sid).await?;

    // Topic/company come from the session fields, falling back to whatever
    // the last entry recorded.
    let last = session.last_entry();
    let previous_json = last.map(|e| e.answer_json.clone()).unwrap_or_default();
    let topic = Topic::from_label(
        session
            .last_topic
            .as_deref()
            .or(last.map(|e| e.topic.as_str()))
            .unwrap_or("general"),
    );
    let company = session
        .company
        .clone()
        .or_else(|| last.and_then(|e| e.company.clone()));

    let follow_text = match body.custom.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(custom) => custom.to_string(),
        None => {
            let idx = body
                .option_index
                .ok_or_else(|| AppError::BadRequest("option_index or custom required".into()))?;

            // Regenerate the options the index refers to.
            let ctx = state
                .search
                .fetch_text(company.as_deref().unwrap_or(topic.as_str()), MAX_SNIPPET_HITS)
                .await;
            let options =
                generate_options(&state.llm, topic, company.as_deref(), &previous_json, &ctx)
                    .await;

            usize::try_from(idx)
                .ok()
                .filter(|i| *i >= 1)
                .and_then(|i| options.get(i - 1))
                .cloned()
                .ok_or_else(|| AppError::BadRequest("invalid option index".into()))?
        }
    };

    let prompt =
        build_followup_prompt(&follow_text, &previous_json, company.as_deref().unwrap_or(""), topic);
    let raw = state.llm.generate(&prompt).await?;
    let answer_json = extract_json(&raw);

    let entry = HistoryEntry {
        question: follow_text,
        clarifiers: None,
        topic: topic.as_str().to_string(),
        company: company.clone(),
        answer_raw: raw,
        answer_json: answer_json.clone(),
        ts: Utc::now(),
    };
    state.store.append(sid, entry).await?;

    let ctx = state
        .search
        .fetch_text(company.as_deref().unwrap_or(topic.as_str()), MAX_SNIPPET_HITS)
        .await;
    let options =
        generate_options(&state.llm, topic, company.as_deref(), &answer_json, &ctx).await;

    info!(session_id = %sid, %topic, "follow-up answered");

    Ok(Json(FollowupResponse {
        session_id: sid,
        answer: Answer::from_extracted(&answer_json),
        options,
    }))
}
