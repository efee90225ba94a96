use anyhow::{Context, Result};

use crate::extraction::OutputShape;

/// Runtime configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Only needed when the model is actually called.
    pub anthropic_api_key: Option<String>,
    /// Default for `--shape` when the flag is not given.
    pub output_shape: Option<OutputShape>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            output_shape: optional_env("COURSE_OUTPUT_SHAPE")
                .map(|s| s.parse::<OutputShape>())
                .transpose()
                .context("COURSE_OUTPUT_SHAPE must be a valid output shape")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.anthropic_api_key
            .as_deref()
            .context("Required environment variable 'ANTHROPIC_API_KEY' is not set")
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
