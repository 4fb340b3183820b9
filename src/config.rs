//! Credentials loaded from the process environment.
//!
//! All three secrets are required before the polling loop starts; a missing
//! or empty value is a fatal startup condition, never a per-iteration error.

use crate::error::{ConfigError, Result};

/// Secrets required to run the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-status API.
    pub practicum_token: String,
    /// Bot API token obtained from BotFather.
    pub telegram_token: String,
    /// Target chat ID for notifications.
    pub telegram_chat_id: i64,
}

impl Config {
    /// Read and validate credentials from the environment.
    ///
    /// Collects every missing variable before failing so the operator sees
    /// the full list in one diagnostic.
    pub fn from_env() -> Result<Self> {
        let practicum_token = read_var("PRACTICUM_TOKEN");
        let telegram_token = read_var("TELEGRAM_TOKEN");
        let chat_id_raw = read_var("TELEGRAM_CHAT_ID");

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push("PRACTICUM_TOKEN");
        }
        if telegram_token.is_none() {
            missing.push("TELEGRAM_TOKEN");
        }
        if chat_id_raw.is_none() {
            missing.push("TELEGRAM_CHAT_ID");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing).into());
        }

        let telegram_chat_id = chat_id_raw
            .unwrap_or_default()
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "TELEGRAM_CHAT_ID",
                reason: e.to_string(),
            })?;

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id,
        })
    }
}

/// An empty variable counts as missing.
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
