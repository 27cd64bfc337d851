use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{ConfigError, SendError, truncate_body};

use super::Notifier;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

const NOTIFIER: &str = "Telegram";

#[derive(Clone)]
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String, timeout: Duration) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            bot_token,
            chat_id,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    /// Point the notifier at another host, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

// The bot token is part of the request path; keep it out of logs.
impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), SendError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let res = self
            .http
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
            // reqwest errors carry the URL, which embeds the token.
            .map_err(|source| SendError::Transport {
                notifier: NOTIFIER,
                source: source.without_url(),
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SendError::Status {
                notifier: NOTIFIER,
                status,
                body: truncate_body(&body),
            });
        }

        tracing::debug!(chat_id = %self.chat_id, "Telegram accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> TelegramNotifier {
        TelegramNotifier::new("123:secret".into(), "-42".into(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn url_is_addressed_by_bot_token() {
        assert_eq!(
            notifier().send_message_url(),
            "https://api.telegram.org/bot123:secret/sendMessage"
        );
    }

    #[test]
    fn payload_uses_html_parse_mode() {
        let payload = SendMessage {
            chat_id: "-42",
            text: "<b>hi</b>",
            parse_mode: "HTML",
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chat_id": "-42", "text": "<b>hi</b>", "parse_mode": "HTML"})
        );
    }

    #[test]
    fn debug_does_not_leak_token() {
        let dbg = format!("{:?}", notifier());
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("-42"));
    }
}
