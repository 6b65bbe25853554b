//! Conversation session persistence.
//!
//! A session is a record keyed by a generated UUID, holding an ordered,
//! append-only history of question/answer exchanges. The store keeps whole
//! sessions behind a single `RwLock`; every append happens under the write
//! lock, so concurrent appends serialize and none is lost. Two follow-ups
//! racing on the same session may both read the same "last entry" before
//! either appends; that read-side race is accepted as last-write-wins.

mod error;
mod session;
mod store;

pub use error::StoreError;
pub use session::{HistoryEntry, Session};
pub use store::MemorySessionStore;
