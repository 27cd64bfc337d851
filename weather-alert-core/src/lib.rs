//! Core library for the weather alert bot.
//!
//! This crate defines:
//! - Configuration assembled from the environment
//! - The weather provider and notifier abstractions with their HTTP clients
//! - Threshold evaluation and alert message formatting
//! - The single-run pipeline tying them together
//!
//! It is used by `weather-alert-cli`, which owns the runtime and logging setup.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod message;
pub mod model;
pub mod notifier;
pub mod pipeline;
pub mod provider;

pub use config::{Config, ThresholdSet};
pub use error::{ConfigError, FetchError, SendError};
pub use evaluate::evaluate;
pub use model::{CompassPoint, EvaluationResult, WeatherReading};
pub use notifier::{Notifier, TelegramNotifier};
pub use pipeline::{Pipeline, RunOutcome};
pub use provider::{OpenWeatherProvider, WeatherProvider};
