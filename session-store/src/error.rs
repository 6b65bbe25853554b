//! Unified error handling for `session-store`.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by session store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No session exists under the given identifier.
    #[error("[Session Store] session not found: {0}")]
    NotFound(Uuid),
}
