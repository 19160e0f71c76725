mod config;
mod content;
mod dispatcher;
mod menu;
mod telegram;
mod update;
mod webhook;

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::telegram::TelegramSender;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,netsanetbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded");
    info!("  Port: {}", config.port);
    info!(
        "  Webhook base URL: {}",
        config.webhook_url.as_deref().unwrap_or("(not set)")
    );
    if config.token_is_placeholder() {
        warn!(
            "TELEGRAM_BOT_TOKEN is not set; using the placeholder token. \
             Every outbound send will be rejected until a real token is configured."
        );
    }

    let bot = Bot::new(&config.bot_token);
    register_webhook(&bot, &config).await?;

    let sink = Arc::new(TelegramSender::new(bot));
    let app = webhook::router(&config, sink);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!("Bot is running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shut down cleanly");
    Ok(())
}

/// Registers `<WEBHOOK_URL>/<token>` with Telegram when a base URL is
/// configured. Deletes any stale webhook first so redeployments start from
/// a clean state.
async fn register_webhook(bot: &Bot, config: &Config) -> Result<()> {
    let Some(endpoint) = config.webhook_endpoint() else {
        info!("WEBHOOK_URL not set; skipping webhook registration");
        return Ok(());
    };
    if config.token_is_placeholder() {
        warn!("Skipping webhook registration: no real bot token");
        return Ok(());
    }

    let _ = bot.delete_webhook().await;
    bot.set_webhook(url::Url::parse(&endpoint).context("Invalid WEBHOOK_URL")?)
        .await
        .context("Failed to register webhook")?;
    info!("Webhook registered at the configured base URL");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
