//! Binary crate for the `weather-alert-cli` scheduled job.
//!
//! This crate focuses on:
//! - Loading credentials from the environment (optionally via `.env`)
//! - Logging setup
//! - Running a single fetch → evaluate → notify pass
//!
//! # Environment variables
//!
//! | Variable          | Required | Description                          |
//! |-------------------|----------|--------------------------------------|
//! | `TELEGRAM_TOKEN`  | yes      | Bot token for the Telegram Bot API   |
//! | `CHAT_ID`         | yes      | Chat that receives alerts            |
//! | `WEATHER_API_KEY` | yes      | OpenWeatherMap API key               |
//! | `RUST_LOG`        | no       | Log filter, default `info` for this job |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_alert_cli=info,weather_alert_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
