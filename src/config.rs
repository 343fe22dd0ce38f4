//! Process configuration, loaded once from the environment at startup.

use anyhow::{Context, Result};
use std::env;

/// Controls whether internal error detail is exposed in 500 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("development") | Ok("dev") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// Immutable application configuration. Loaded once, never mutated; handlers
/// see it through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub admin_token: String,
    pub port: u16,
    pub environment: Environment,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(AppConfig {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            admin_token: required("ADMIN_TOKEN")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            environment: Environment::from_env(),
        })
    }

    /// Internal error detail is only surfaced in development mode.
    pub fn expose_error_detail(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("missing required environment variable {}", key))
}
