//! Outbound Telegram delivery behind a trait so the webhook layer can be
//! exercised without network access.

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::warn;

use crate::dispatcher::Reply;

#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, chat_id: ChatId, reply: Reply) -> Result<()>;
}

/// Real sender over the Telegram Bot API.
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ReplySink for TelegramSender {
    async fn deliver(&self, chat_id: ChatId, reply: Reply) -> Result<()> {
        let mut request = self.bot.send_message(chat_id, reply.text);
        if let Some(mode) = reply.parse_mode {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = reply.keyboard {
            request = request.reply_markup(keyboard);
        }

        // One failed reply must not take the process down; the platform
        // gets its 200 either way.
        if let Err(e) = request.await {
            warn!("Failed to send reply to chat {}: {e}", chat_id.0);
        }
        Ok(())
    }
}
