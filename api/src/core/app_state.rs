use ai_gemini_service::{AiGeminiError, GeminiConfig, GeminiService};
use session_store::MemorySessionStore;
use snippet_search::{SearchConfig, SearchError, SnippetFetcher};
use thiserror::Error;

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gemini configuration: {0}")]
    Gemini(#[source] AiGeminiError),

    #[error("search configuration: {0}")]
    Search(#[from] SearchError),
}

/// Shared state for all HTTP handlers.
///
/// All environment reads happen here, once, at startup. Handlers and the
/// services below never touch ambient env state, so tests can construct an
/// `AppState` with whatever configs they need.
pub struct AppState {
    /// Session persistence.
    pub store: MemorySessionStore,
    /// Gemini client used for answers, follow-up expansion, and options.
    pub llm: GeminiService,
    /// Web-search snippet fetcher (degrades to empty text on any failure).
    pub search: SnippetFetcher,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// [`ConfigError::Gemini`] if `GEMINI_API_KEY` is missing or the client
    /// cannot be built. A missing Tavily key is not an error: search then
    /// degrades to empty snippets per its contract.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_cfg = GeminiConfig::from_env().map_err(ConfigError::Gemini)?;
        let llm = GeminiService::new(gemini_cfg).map_err(ConfigError::Gemini)?;
        let search = SnippetFetcher::new(SearchConfig::from_env())?;

        Ok(Self {
            store: MemorySessionStore::new(),
            llm,
            search,
        })
    }
}
