use crate::error::{NotesError, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Upper bound for `SESSION_TTL_SECS`: one hundred years.
pub const MAX_SESSION_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Model
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,

    // Uploads and sessions
    pub max_upload_mb: usize,
    pub session_ttl_secs: u64,
}

// Keeps the credential out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("max_upload_mb", &self.max_upload_mb)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                NotesError::Config("GEMINI_API_KEY environment variable not set".to_string())
            })?;

        let session_ttl_secs = parse_or(&lookup, "SESSION_TTL_SECS", 3600)?;
        if session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(NotesError::Config(format!(
                "SESSION_TTL_SECS must be at most {} seconds, got {}",
                MAX_SESSION_TTL_SECS, session_ttl_secs
            )));
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,

            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: parse_or(&lookup, "GEMINI_TEMPERATURE", 0.3)?,
            max_output_tokens: parse_or(&lookup, "GEMINI_MAX_OUTPUT_TOKENS", 1000)?,

            max_upload_mb: parse_or(&lookup, "MAX_UPLOAD_MB", 200)?,
            session_ttl_secs,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| NotesError::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}
