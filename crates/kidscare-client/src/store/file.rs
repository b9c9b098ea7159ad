//! File-backed session store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use kidscare_core::Session;

use super::{SessionStore, StoreError};

/// Stores the session as a JSON document at a fixed path, e.g.
/// `~/.kidscare/session.default.json`.
///
/// Saves write to a sibling temp file and rename over the target, so a
/// reader never observes a partially written session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the file at `path`. The parent directory
    /// is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(session)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> Option<Session> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "session file unreadable, treating as absent");
                return None;
            }
        };
        let session: Session = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "session file corrupt, treating as absent");
                return None;
            }
        };
        if let Err(err) = session.validate() {
            tracing::warn!(path = %self.path.display(), %err, "session file incomplete, treating as absent");
            return None;
        }
        Some(session)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
