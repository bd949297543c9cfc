pub mod chat_session;
pub mod config;
pub mod document_processor;
pub mod error;
pub mod gemini_service;
pub mod models;
pub mod query_service;
pub mod session_store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use chat_session::{ChatHandle, ChatSession, EXPORT_FILENAME};
pub use config::Config;
pub use document_processor::DocumentProcessor;
pub use error::{NotesError, Result, GENERATION_HINT};
pub use gemini_service::{GeminiService, GenerativeModel};
pub use models::*;
pub use query_service::QueryService;
pub use session_store::{SessionHandle, SessionStore};
