use crate::error::Result;
use crate::gemini_service::GenerativeModel;
use crate::models::*;
use std::sync::Arc;

/// Stateless question answering over a single document.
pub struct QueryService {
    model: Arc<dyn GenerativeModel>,
}

impl QueryService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Every call reaches the model; nothing is cached between calls.
    pub async fn ask(&self, prompt: &SingleShotPrompt) -> Result<String> {
        prompt.validate()?;

        let start_time = std::time::Instant::now();
        let answer = self.model.generate(prompt.to_contents()).await?;

        log::info!(
            "Answered question over {} chars of notes in {}ms",
            prompt.document_text.chars().count(),
            start_time.elapsed().as_millis()
        );
        Ok(answer)
    }
}
