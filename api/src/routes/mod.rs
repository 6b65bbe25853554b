pub mod followup;
pub mod query;
pub mod session;

/// Snippet hits requested per search.
pub const MAX_SNIPPET_HITS: usize = 6;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use ai_gemini_service::{GeminiConfig, GeminiService};
    use session_store::MemorySessionStore;
    use snippet_search::{SearchConfig, SnippetFetcher};

    use crate::core::app_state::AppState;

    /// State wired for handler tests: no search key (degrades to empty
    /// snippets without touching the network) and a Gemini endpoint nothing
    /// listens on, so provider calls fail fast instead of going out.
    pub fn test_state() -> Arc<AppState> {
        state_with_llm_endpoint("http://127.0.0.1:9")
    }

    /// State whose Gemini endpoint is a local stub that answers every
    /// request with `canned` as the sole candidate text. The search side
    /// stays keyless, so success-path tests also cover a degraded search.
    pub async fn stub_state(canned: &str) -> Arc<AppState> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let reply = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": canned }] } }]
        })
        .to_string();
        let app = axum::Router::new().fallback(move || {
            let reply = reply.clone();
            async move { reply }
        });
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        state_with_llm_endpoint(&endpoint)
    }

    fn state_with_llm_endpoint(endpoint: &str) -> Arc<AppState> {
        let llm = GeminiService::new(GeminiConfig {
            model: "gemini-2.0-flash".into(),
            endpoint: endpoint.into(),
            api_key: Some("test-key".into()),
            temperature: Some(0.25),
            top_p: Some(0.8),
            top_k: Some(40),
            timeout_secs: Some(2),
        })
        .unwrap();

        let search = SnippetFetcher::new(SearchConfig {
            api_key: None,
            endpoint: "http://127.0.0.1:9".into(),
            timeout_secs: 1,
        })
        .unwrap();

        Arc::new(AppState {
            store: MemorySessionStore::new(),
            llm,
            search,
        })
    }
}
