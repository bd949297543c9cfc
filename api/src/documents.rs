use crate::api_error::ApiError;
use crate::chat_response::AskResponse;
use crate::state::AppState;
use crate::upload::read_form;
use axum::{
    extract::{Multipart, State},
    Json,
};
use notes_chat::{ExtractedDocument, SingleShotPrompt};

pub async fn upload_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedDocument>, ApiError> {
    let mut form = read_form(&state.processor, multipart).await?;
    let document = state.processor.extract(form.require_upload()?).await?;

    log::info!(
        "Notes uploaded successfully: {} ({} chars)",
        document.filename,
        document.char_count
    );
    Ok(Json(document))
}

/// Upload and question in one request; a failed extraction never reaches the model.
pub async fn ask_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AskResponse>, ApiError> {
    let mut form = read_form(&state.processor, multipart).await?;
    let document = state.processor.extract(form.require_upload()?).await?;

    let prompt = SingleShotPrompt {
        document_text: document.text,
        question: form.question.unwrap_or_default(),
    };
    let answer = state.query_service.ask(&prompt).await?;

    Ok(Json(AskResponse {
        filename: document.filename,
        answer,
    }))
}
