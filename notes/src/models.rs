use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role name on the Gemini wire, which calls the assistant "model".
    pub fn as_gemini_role(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}

/// One entry of a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// A file as received from the client, before any decoding.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub filename: String,
    pub media_type: String,
    pub text: String,
    pub char_count: usize,
}

/// Stateless question against a document: sent as `[document_text, question]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleShotPrompt {
    pub document_text: String,
    pub question: String,
}

impl SingleShotPrompt {
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(NotesError::Validation("question must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn to_contents(&self) -> Vec<GeminiContent> {
        vec![GeminiContent {
            role: Some(Role::User.as_gemini_role().to_string()),
            parts: vec![
                GeminiPart {
                    text: self.document_text.clone(),
                },
                GeminiPart {
                    text: self.question.clone(),
                },
            ],
        }]
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl From<&NotesError> for ErrorResponse {
    fn from(err: &NotesError) -> Self {
        Self {
            status: "error".to_string(),
            error: err.kind().to_string(),
            message: err.to_string(),
            hint: err.hint().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn from_turn(turn: &Turn) -> Self {
        Self {
            role: Some(turn.role.as_gemini_role().to_string()),
            parts: vec![GeminiPart {
                text: turn.text.clone(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}
