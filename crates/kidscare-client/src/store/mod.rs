//! Session persistence.
//!
//! The session store is the single source of truth for the active session
//! and the only component that touches durable state. At most one session
//! exists at a time; writers are the login flow (on success), the authorized
//! client (clearing on token rejection), and explicit logout.
//!
//! # Implementation Notes
//!
//! Implementations should:
//!
//! - Make `save` atomic from the caller's perspective (no partial session
//!   is ever observable)
//! - Treat corrupt or structurally invalid persisted data as absent rather
//!   than surfacing it
//! - Make `clear` idempotent
//! - Never log the stored access token

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use kidscare_core::Session;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Errors raised by session store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be serialized.
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for at most one [`Session`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists `session`, overwriting any existing one. Atomic from the
    /// caller's perspective: a concurrent [`load`](SessionStore::load) sees
    /// either the old session or the new one, never a partial write.
    async fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Returns the persisted session if one is present and structurally
    /// valid. Missing, unreadable, or corrupt data all read as absent; this
    /// method never surfaces an error.
    async fn load(&self) -> Option<Session>;

    /// Removes the persisted session. Clearing an already-absent session is
    /// a no-op success.
    async fn clear(&self) -> Result<(), StoreError>;
}
