use crate::api_error::ApiError;
use crate::query_payload::QueryPayload;
use crate::state::AppState;
use axum::{extract::State, Json};
use notes_chat::{QueryResponse, SingleShotPrompt};

pub async fn query(
    State(state): State<AppState>,
    Json(payload): Json<QueryPayload>,
) -> Result<Json<QueryResponse>, ApiError> {
    let prompt = SingleShotPrompt::from(payload);
    let answer = state.query_service.ask(&prompt).await?;

    Ok(Json(QueryResponse {
        status: "success".to_string(),
        answer,
    }))
}
