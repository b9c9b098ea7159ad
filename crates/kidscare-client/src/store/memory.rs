//! In-memory session store, used by tests and by embedders that manage
//! their own persistence.

use async_trait::async_trait;
use tokio::sync::RwLock;

use kidscare_core::Session;

use super::{SessionStore, StoreError};

/// Keeps the session in process memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.inner.write().await = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.inner.write().await = None;
        Ok(())
    }
}
