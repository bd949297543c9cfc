//! Multi-turn conversation over the model.
//!
//! A [`ChatSession`] owns the user-visible transcript and one [`ChatHandle`].
//! The handle carries the history that is replayed to the model on each
//! exchange and only ever grows by whole (user, model) pairs, so a failed
//! turn leaves nothing behind for the next request. The transcript, in
//! contrast, keeps the user's message of a failed turn.

use crate::error::{NotesError, Result};
use crate::gemini_service::GenerativeModel;
use crate::models::*;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Name of the downloadable file holding the latest answer.
pub const EXPORT_FILENAME: &str = "chatbot_response.txt";

pub struct ChatHandle {
    model: Arc<dyn GenerativeModel>,
    history: Vec<GeminiContent>,
}

impl ChatHandle {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            history: Vec::new(),
        }
    }

    pub async fn send(&mut self, message: &str) -> Result<String> {
        let user_content = GeminiContent::from_turn(&Turn::user(message));

        let mut contents = self.history.clone();
        contents.push(user_content.clone());

        let reply = self.model.generate(contents).await?;

        self.history.push(user_content);
        self.history.push(GeminiContent::from_turn(&Turn::assistant(reply.as_str())));
        Ok(reply)
    }

    pub fn history(&self) -> &[GeminiContent] {
        &self.history
    }
}

pub struct ChatSession {
    id: String,
    transcript: Vec<Turn>,
    handle: ChatHandle,
    last_response: Option<String>,
    created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("turns", &self.transcript.len())
            .field("has_response", &self.last_response.is_some())
            .field("last_active", &self.last_active)
            .finish()
    }
}

impl ChatSession {
    pub fn new(id: impl Into<String>, model: Arc<dyn GenerativeModel>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            transcript: Vec::new(),
            handle: ChatHandle::new(model),
            last_response: None,
            created_at: now,
            last_active: now,
        }
    }

    pub async fn send_message(&mut self, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            return Err(NotesError::Validation("message must not be empty".to_string()));
        }

        self.touch();
        self.transcript.push(Turn::user(message));

        match self.handle.send(message).await {
            Ok(reply) => {
                self.transcript.push(Turn::assistant(reply.as_str()));
                self.last_response = Some(reply.clone());
                self.touch();
                Ok(reply)
            }
            Err(e) => {
                log::warn!("Session {}: turn {} failed: {}", self.id, self.transcript.len(), e);
                Err(e)
            }
        }
    }

    /// UTF-8 bytes of the latest successful answer.
    pub fn export_last_response(&self) -> Option<Vec<u8>> {
        self.last_response
            .as_ref()
            .map(|response| response.as_bytes().to_vec())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedModel;

    fn generation_error() -> NotesError {
        NotesError::Generation("connection reset".to_string())
    }

    #[tokio::test]
    async fn two_successful_turns_build_an_ordered_transcript() {
        let model = Arc::new(ScriptedModel::replying(&["r1", "r2"]));
        let mut session = ChatSession::new("s1", model);

        assert_eq!(session.send_message("m1").await.unwrap(), "r1");
        assert_eq!(session.send_message("m2").await.unwrap(), "r2");

        assert_eq!(
            session.transcript(),
            &[
                Turn::user("m1"),
                Turn::assistant("r1"),
                Turn::user("m2"),
                Turn::assistant("r2"),
            ]
        );
    }

    #[tokio::test]
    async fn handle_replays_prior_turns() {
        let model = Arc::new(ScriptedModel::replying(&["r1", "r2"]));
        let mut session = ChatSession::new("s1", model.clone());

        session.send_message("m1").await.unwrap();
        session.send_message("m2").await.unwrap();

        let calls = model.calls();
        assert_eq!(calls[0].len(), 1);
        let second: Vec<(Option<&str>, &str)> = calls[1]
            .iter()
            .map(|c| (c.role.as_deref(), c.parts[0].text.as_str()))
            .collect();
        assert_eq!(
            second,
            vec![
                (Some("user"), "m1"),
                (Some("model"), "r1"),
                (Some("user"), "m2"),
            ]
        );
    }

    #[tokio::test]
    async fn failed_turn_keeps_user_entry_only() {
        let model = Arc::new(ScriptedModel::new(vec![Err(generation_error())]));
        let mut session = ChatSession::new("s1", model);

        let err = session.send_message("m1").await.unwrap_err();
        assert!(matches!(err, NotesError::Generation(_)));
        assert_eq!(session.transcript(), &[Turn::user("m1")]);
        assert!(session.export_last_response().is_none());
    }

    #[tokio::test]
    async fn failed_turn_is_not_replayed_to_the_model() {
        let model = Arc::new(ScriptedModel::new(vec![
            Ok("r1".to_string()),
            Err(generation_error()),
            Ok("r3".to_string()),
        ]));
        let mut session = ChatSession::new("s1", model.clone());

        session.send_message("m1").await.unwrap();
        session.send_message("m2").await.unwrap_err();
        assert_eq!(session.handle.history().len(), 2);

        session.send_message("m3").await.unwrap();

        let calls = model.calls();
        let last_call: Vec<&str> = calls[2].iter().map(|c| c.parts[0].text.as_str()).collect();
        assert_eq!(last_call, vec!["m1", "r1", "m3"]);

        let history: Vec<&str> = session
            .handle
            .history()
            .iter()
            .map(|c| c.parts[0].text.as_str())
            .collect();
        assert_eq!(history, vec!["m1", "r1", "m3", "r3"]);
        assert_eq!(session.transcript().len(), 5);
    }

    #[tokio::test]
    async fn transcript_never_exceeds_two_entries_per_message() {
        let model = Arc::new(ScriptedModel::new(vec![
            Ok("a".to_string()),
            Err(generation_error()),
            Err(generation_error()),
            Ok("b".to_string()),
        ]));
        let mut session = ChatSession::new("s1", model);

        let messages = ["one", "two", "three", "four"];
        for message in messages {
            let _ = session.send_message(message).await;
        }

        assert!(session.transcript().len() <= 2 * messages.len());
        assert_eq!(session.transcript().len(), 6);
    }

    #[tokio::test]
    async fn export_holds_only_the_latest_answer() {
        let model = Arc::new(ScriptedModel::new(vec![
            Ok("first answer".to_string()),
            Ok("second answer ✓".to_string()),
            Err(generation_error()),
        ]));
        let mut session = ChatSession::new("s1", model);

        session.send_message("q1").await.unwrap();
        session.send_message("q2").await.unwrap();
        session.send_message("q3").await.unwrap_err();

        let bytes = session.export_last_response().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "second answer ✓");
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_recording() {
        let model = Arc::new(ScriptedModel::replying(&["unused"]));
        let mut session = ChatSession::new("s1", model.clone());

        let err = session.send_message("  \n").await.unwrap_err();
        assert!(matches!(err, NotesError::Validation(_)));
        assert!(session.transcript().is_empty());
        assert!(model.calls().is_empty());
    }
}
