use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_CLASSIFICATION_CHAR_BUDGET: usize = 4000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if `API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub gemini_model: String,
    pub port: u16,
    pub rust_log: String,
    pub llm_timeout_secs: u64,
    /// Combined document content sent for content-type classification is cut to this many characters.
    pub classification_char_budget: usize,
    /// Files without a summary are left out of the script prompt.
    pub skip_unsummarized_files: bool,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: require_env("API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            classification_char_budget: parse_env(
                "CLASSIFICATION_CHAR_BUDGET",
                DEFAULT_CLASSIFICATION_CHAR_BUDGET,
            )?,
            skip_unsummarized_files: parse_env("SKIP_UNSUMMARIZED_FILES", true)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Defaults used by handler tests; no environment access.
    pub fn for_tests() -> Self {
        Config {
            api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            port: 8000,
            rust_log: "debug".to_string(),
            llm_timeout_secs: 5,
            classification_char_budget: DEFAULT_CLASSIFICATION_CHAR_BUDGET,
            skip_unsummarized_files: true,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
