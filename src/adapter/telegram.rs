//! Telegram delivery channel.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::error::Result;
use crate::port::Messenger;

/// Sends notifications to a fixed Telegram chat.
pub struct TelegramMessenger {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}
