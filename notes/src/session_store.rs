use crate::chat_session::ChatSession;
use crate::error::{NotesError, Result};
use crate::gemini_service::GenerativeModel;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SessionHandle = Arc<Mutex<ChatSession>>;

struct Entry {
    session: SessionHandle,
    // Mirrors the session's own activity so expiry checks never wait on a busy turn.
    last_seen: DateTime<Utc>,
}

impl Entry {
    // A locked session has a turn in flight and is never expired.
    fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen <= cutoff && self.session.try_lock().is_ok()
    }
}

/// In-memory chat sessions keyed by id, dropped after `ttl` of inactivity.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
    model: Arc<dyn GenerativeModel>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(model: Arc<dyn GenerativeModel>, ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            model,
            ttl,
        }
    }

    /// TTL given in seconds; values beyond chrono's range mean sessions never expire.
    pub fn with_ttl_secs(model: Arc<dyn GenerativeModel>, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self::new(model, ttl)
    }

    pub async fn create(&self) -> (String, SessionHandle) {
        self.purge_expired().await;

        let id = Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(ChatSession::new(id.clone(), self.model.clone())));

        self.sessions.write().await.insert(
            id.clone(),
            Entry {
                session: session.clone(),
                last_seen: Utc::now(),
            },
        );

        log::info!("Created chat session {}", id);
        (id, session)
    }

    /// Looks up a live session and marks it as used.
    pub async fn get(&self, id: &str) -> Result<SessionHandle> {
        self.purge_expired().await;

        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(id)
            .ok_or_else(|| NotesError::SessionNotFound(id.to_string()))?;
        entry.last_seen = Utc::now();
        Ok(entry.session.clone())
    }

    /// Marks a session as used again, e.g. after a long turn finishes.
    pub async fn touch(&self, id: &str) {
        if let Some(entry) = self.sessions.write().await.get_mut(id) {
            entry.last_seen = Utc::now();
        }
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        match self.sessions.write().await.remove(id) {
            Some(_) => {
                log::info!("Removed chat session {}", id);
                Ok(())
            }
            None => Err(NotesError::SessionNotFound(id.to_string())),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops idle sessions and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        match Utc::now().checked_sub_signed(self.ttl) {
            Some(cutoff) => self.purge_idle_since(cutoff).await,
            None => 0,
        }
    }

    async fn purge_idle_since(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle_since(cutoff));

        let purged = before - sessions.len();
        if purged > 0 {
            log::info!("Expired {} idle chat session(s)", purged);
        }
        purged
    }
}
