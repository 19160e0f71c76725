use anyhow::{Context, Result};

/// Placeholder token used when the env var is missing. Startup logs a
/// warning when it is in use because every outbound call will be rejected
/// by Telegram.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_BOT_TOKEN_HERE";

const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, read once from the environment in `main` and
/// passed down explicitly. There is no global bot instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot access token. Also the secret webhook path.
    pub bot_token: String,
    /// Local HTTP listen port.
    pub port: u16,
    /// Public base URL to register the webhook under, e.g.
    /// `https://bot.example.com`. When unset no registration call is made.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            std::env::var("PORT").ok(),
            std::env::var("WEBHOOK_URL").ok(),
        )
    }

    /// Parse core, split from `from_env` so tests don't have to mutate the
    /// process environment.
    fn from_vars(
        token: Option<String>,
        port: Option<String>,
        webhook_url: Option<String>,
    ) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_TOKEN.to_string());

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got: {p}"))?,
            None => DEFAULT_PORT,
        };

        let webhook_url = webhook_url
            .filter(|u| !u.is_empty())
            .map(|u| u.trim_end_matches('/').to_string());

        Ok(Self {
            bot_token,
            port,
            webhook_url,
        })
    }

    /// True when running on the fallback token; outbound sends cannot work.
    pub fn token_is_placeholder(&self) -> bool {
        self.bot_token == PLACEHOLDER_TOKEN
    }

    /// Full webhook endpoint to register, when a base URL is configured.
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.webhook_url
            .as_ref()
            .map(|base| format!("{}/{}", base, self.bot_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(config.bot_token, PLACEHOLDER_TOKEN);
        assert!(config.token_is_placeholder());
        assert_eq!(config.port, 5000);
        assert_eq!(config.webhook_url, None);
        assert_eq!(config.webhook_endpoint(), None);
    }

    #[test]
    fn reads_token_and_port() {
        let config = Config::from_vars(
            Some("123456:ABC-DEF".to_string()),
            Some("8080".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.bot_token, "123456:ABC-DEF");
        assert!(!config.token_is_placeholder());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_token_falls_back_to_placeholder() {
        let config = Config::from_vars(Some(String::new()), None, None).unwrap();
        assert!(config.token_is_placeholder());
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_vars(None, Some("fivethousand".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn webhook_endpoint_joins_base_and_token() {
        let config = Config::from_vars(
            Some("123456:ABC-DEF".to_string()),
            None,
            Some("https://bot.example.com/".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.webhook_endpoint().unwrap(),
            "https://bot.example.com/123456:ABC-DEF"
        );
    }
}
