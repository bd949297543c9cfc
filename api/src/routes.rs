use crate::state::AppState;
use crate::{documents, health, query, sessions};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub fn create_routes(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        // Single-shot Q&A
        .route("/documents", post(documents::upload_document))
        .route("/ask", post(documents::ask_document))
        .route("/query", post(query::query))
        // Chat sessions
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/:id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/:id/messages", post(sessions::send_message))
        .route("/sessions/:id/export", get(sessions::export_response))
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
