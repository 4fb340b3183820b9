//! Trait seams between the polling loop and the outside world.
//!
//! The loop is generic over these so that tests can script the API and
//! record outbound messages without any network.

use async_trait::async_trait;

use crate::domain::StatusFeed;
use crate::error::Result;

/// Source of homework status updates.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch all status changes recorded at or after `from_date`.
    async fn fetch(&self, from_date: i64) -> Result<StatusFeed>;
}

/// Outbound channel for notifications.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver one message to the configured destination.
    async fn send(&self, text: &str) -> Result<()>;
}
