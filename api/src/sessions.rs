use crate::api_error::ApiError;
use crate::chat_response::{MessageResponse, SessionCreated, TranscriptResponse};
use crate::query_payload::MessagePayload;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use notes_chat::{NotesError, EXPORT_FILENAME};

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let (session_id, _) = state.sessions.create().await;
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let handle = state.sessions.get(&session_id).await?;
    let session = handle.lock().await;

    Ok(Json(TranscriptResponse {
        session_id,
        transcript: session.transcript().to_vec(),
        has_response: session.last_response().is_some(),
        created_at: session.created_at(),
        last_active: session.last_active(),
    }))
}

/// One chat turn. The session lock is held for the whole model call, so turns
/// in the same session run one after another.
pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<MessagePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let handle = state.sessions.get(&session_id).await?;
    let mut session = handle.lock().await;

    let result = session.send_message(&payload.message).await;
    state.sessions.touch(&session_id).await;
    let reply = result?;

    Ok(Json(MessageResponse {
        reply,
        transcript: session.transcript().to_vec(),
    }))
}

pub async fn export_response(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let handle = state.sessions.get(&session_id).await?;
    let bytes = handle
        .lock()
        .await
        .export_last_response()
        .ok_or(NotesError::NoResponseYet)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        bytes,
    ))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
