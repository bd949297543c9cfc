use crate::config::Config;
use crate::error::{NotesError, Result};
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

/// Anything that can turn a list of contents into generated text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, contents: Vec<GeminiContent>) -> Result<String>;
}

pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    generation_config: GeminiGenerationConfig,
}

impl GeminiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            generation_config: GeminiGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiService {
    async fn generate(&self, contents: Vec<GeminiContent>) -> Result<String> {
        let request = GeminiRequest {
            contents,
            generation_config: Some(self.generation_config.clone()),
        };

        log::debug!(
            "Sending {} content(s) to {}",
            request.contents.len(),
            self.endpoint()
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| NotesError::Generation(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NotesError::Generation(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| NotesError::Generation(e.without_url().to_string()))?;

        extract_answer(gemini_response)
    }
}

/// Joins the text parts of the first candidate, like the SDK's `response.text`.
fn extract_answer(response: GeminiResponse) -> Result<String> {
    let answer: String = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if answer.is_empty() {
        return Err(NotesError::Generation("model returned no text".to_string()));
    }
    Ok(answer)
}
