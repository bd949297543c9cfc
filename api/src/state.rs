use notes_chat::{Config, DocumentProcessor, GenerativeModel, QueryService, SessionStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub processor: Arc<DocumentProcessor>,
    pub query_service: Arc<QueryService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Wires the services around one shared model client.
    pub fn new(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        log::info!(
            "Sessions expire after {}s of inactivity; uploads capped at {} MB",
            config.session_ttl_secs,
            config.max_upload_mb
        );

        let sessions = SessionStore::with_ttl_secs(model.clone(), config.session_ttl_secs);

        Self {
            config: Arc::new(config),
            processor: Arc::new(DocumentProcessor::new()),
            query_service: Arc::new(QueryService::new(model)),
            sessions: Arc::new(sessions),
        }
    }
}
