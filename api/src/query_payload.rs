use notes_chat::SingleShotPrompt;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct QueryPayload {
    pub document_text: String,
    pub question: String,
}

impl From<QueryPayload> for SingleShotPrompt {
    fn from(payload: QueryPayload) -> Self {
        SingleShotPrompt {
            document_text: payload.document_text,
            question: payload.question,
        }
    }
}

#[derive(Deserialize)]
pub struct MessagePayload {
    pub message: String,
}
