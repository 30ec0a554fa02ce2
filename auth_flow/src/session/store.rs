use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::SessionError;
use super::types::Session;

/// Persistence seam for sessions.
///
/// The flow layer never owns the store; callers inject an implementation.
/// Expired sessions must read back as absent.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session by id. Returns `None` for unknown or expired ids.
    async fn load(&self, session_id: &str) -> Result<Option<Session>, SessionError>;

    /// Store a session under `session_id`, replacing any existing one.
    async fn put(&self, session_id: &str, session: Session) -> Result<(), SessionError>;

    /// Remove a session. Removing an unknown id is not an error.
    async fn remove(&self, session_id: &str) -> Result<(), SessionError>;
}

/// In-memory session store, suitable for tests and single-process deployments.
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
impl MemorySessionStore {
    pub(crate) async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<Session>, SessionError> {
        let entries = self.entries.lock().await;
        let Some(raw) = entries.get(session_id) else {
            return Ok(None);
        };
        let session: Session = serde_json::from_str(raw)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        if session.is_expired() {
            tracing::debug!("Session {} expired at {}", session_id, session.expires_at);
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn put(&self, session_id: &str, session: Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        self.entries
            .lock()
            .await
            .insert(session_id.to_string(), raw);
        Ok(())
    }

    async fn remove(&self, session_id: &str) -> Result<(), SessionError> {
        self.entries.lock().await.remove(session_id);
        Ok(())
    }
}
