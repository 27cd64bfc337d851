use anyhow::Context;
use chrono::Local;
use clap::Parser;
use weather_alert_core::{
    Config, Pipeline, RunOutcome, notifier::notifier_from_config, provider::provider_from_config,
};

const BANNER_WIDTH: usize = 50;

/// Top-level CLI struct. The job takes no arguments; credentials come from the environment.
#[derive(Debug, Parser)]
#[command(
    name = "weather-alert",
    version,
    about = "Check current weather and send a Telegram alert when it turns hazardous"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env().context("Failed to load configuration from environment")?;

        let provider =
            provider_from_config(&config).context("Failed to initialise weather provider")?;
        let notifier = notifier_from_config(&config).context("Failed to initialise notifier")?;

        print_start_banner(&config.city);

        let outcome = Pipeline::new(&config, provider.as_ref(), notifier.as_ref())
            .run()
            .await;

        match &outcome {
            RunOutcome::FetchFailed { notice_sent } => {
                tracing::warn!(notice_sent, "Run ended without weather data");
            }
            RunOutcome::AllClear(_) => {}
            RunOutcome::Alerted { evaluation, delivered } => {
                tracing::info!(alerts = evaluation.alerts.len(), delivered, "Alert run finished");
            }
        }

        print_end_banner();

        // Run-time failures are already logged and reported to the chat; the job still succeeds.
        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

fn print_start_banner(city: &str) {
    println!("\n{}", rule());
    println!(
        "🤖 Weather Alert Bot - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("📍 City: {city}");
    println!("{}\n", rule());
}

fn print_end_banner() {
    println!("\n{}", rule());
    println!("🏁 Bot execution completed");
    println!("{}\n", rule());
}
