use chrono::{DateTime, Utc};
use notes_chat::Turn;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct AskResponse {
    pub filename: String,
    pub answer: String,
}

#[derive(Deserialize, Serialize)]
pub struct SessionCreated {
    pub session_id: String,
}

#[derive(Deserialize, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub transcript: Vec<Turn>,
    pub has_response: bool,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

#[derive(Deserialize, Serialize)]
pub struct MessageResponse {
    pub reply: String,
    pub transcript: Vec<Turn>,
}
