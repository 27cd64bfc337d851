use crate::{
    Config,
    error::{ConfigError, SendError},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod telegram;

pub use telegram::TelegramNotifier;

/// Destination for formatted alert messages.
#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    async fn send(&self, text: &str) -> Result<(), SendError>;
}

/// Construct the notifier described by `config`.
pub fn notifier_from_config(config: &Config) -> Result<Box<dyn Notifier>, ConfigError> {
    let notifier = TelegramNotifier::new(
        config.telegram_token.clone(),
        config.chat_id.clone(),
        config.http_timeout,
    )?;
    Ok(Box::new(notifier))
}
