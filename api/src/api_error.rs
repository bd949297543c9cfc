use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_chat::{ErrorResponse, NotesError};

/// Carries a library error out of a handler as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub NotesError);

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            NotesError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NotesError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NotesError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            NotesError::Generation(_) => StatusCode::BAD_GATEWAY,
            NotesError::Validation(_) => StatusCode::BAD_REQUEST,
            NotesError::SessionNotFound(_) | NotesError::NoResponseYet => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        } else {
            log::warn!("Request rejected: {}", self.0);
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
