//! Command-line interface definitions and diagnostic subcommands.

use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::adapter::{PracticumClient, TelegramMessenger};
use crate::config::Config;
use crate::error::Result;
use crate::port::{HomeworkApi, Messenger};

/// Homework review status watcher for Yandex Practicum
#[derive(Parser, Debug)]
#[command(name = "statushound")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the polling loop (default)
    Run,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `statushound check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Send a test message to the configured Telegram chat
    Telegram,
    /// Perform a single homework-status fetch and report the result
    Api,
}

/// Send one test message through the configured channel.
pub async fn check_telegram(config: &Config) -> Result<()> {
    let messenger = TelegramMessenger::new(&config.telegram_token, config.telegram_chat_id);
    messenger.send("statushound: тестовое сообщение").await?;
    println!("Test message sent to chat {}", config.telegram_chat_id);
    Ok(())
}

/// Perform one fetch against the homework-status API and validate it.
pub async fn check_api(config: &Config) -> Result<()> {
    let client = PracticumClient::new(&config.practicum_token);
    let from_date = Utc::now().timestamp();
    let feed = client.fetch(from_date).await?;
    let count = feed.homeworks()?.len();
    println!("API reachable; {count} homework update(s) since {from_date}");
    Ok(())
}
