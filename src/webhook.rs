//! HTTP surface: the token-path webhook receiver and the root status probe.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use teloxide::types::ChatId;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::dispatcher;
use crate::telegram::ReplySink;
use crate::update::Update;

#[derive(Clone)]
pub struct AppState {
    sink: Arc<dyn ReplySink>,
}

/// Builds the router. The update endpoint lives at a path equal to the bot
/// token, which is what makes the webhook URL secret.
pub fn router(config: &Config, sink: Arc<dyn ReplySink>) -> Router {
    let state = AppState { sink };
    Router::new()
        .route("/", get(status))
        .route(&format!("/{}", config.bot_token), post(receive_update))
        .with_state(state)
}

async fn status() -> &'static str {
    "Bot is running!"
}

/// Webhook entry point. Always acknowledges with 200 `"!"` — returning an
/// error status would make Telegram redeliver the same update in a retry
/// storm, so parse failures are logged and swallowed.
async fn receive_update(State(state): State<AppState>, body: String) -> &'static str {
    let update: Update = match serde_json::from_str(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Ignoring malformed update payload: {e}");
            return "!";
        }
    };

    let Some(message) = update.message else {
        debug!("Update without a message, nothing to do");
        return "!";
    };
    let Some(text) = message.text.as_deref() else {
        debug!("Non-text message in chat {}, ignoring", message.chat.id);
        return "!";
    };

    if let Some(reply) = dispatcher::respond_to(text, message.sender_name()) {
        let chat_id = ChatId(message.chat.id);
        if let Err(e) = state.sink.deliver(chat_id, reply).await {
            error!("Failed to deliver reply to chat {}: {e:#}", chat_id.0);
        }
    }

    "!"
}
