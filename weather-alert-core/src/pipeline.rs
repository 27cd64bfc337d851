//! One run of the bot: fetch → evaluate → format → notify.
//!
//! Every step is awaited before the next begins. Failures from the provider or
//! the notifier are logged and folded into a [`RunOutcome`]; nothing here is
//! retried and nothing escapes as an error.

use chrono::{Local, NaiveDateTime};

use crate::{
    Config,
    evaluate::evaluate,
    message::{FETCH_FAILURE_NOTICE, format_alert_message},
    model::EvaluationResult,
    notifier::Notifier,
    provider::WeatherProvider,
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No reading; a failure notice was attempted.
    FetchFailed { notice_sent: bool },
    /// Reading within limits; the chat was not contacted.
    AllClear(EvaluationResult),
    /// At least one rule fired and an alert was attempted.
    Alerted {
        evaluation: EvaluationResult,
        delivered: bool,
    },
}

pub struct Pipeline<'a> {
    config: &'a Config,
    provider: &'a dyn WeatherProvider,
    notifier: &'a dyn Notifier,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        provider: &'a dyn WeatherProvider,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
        }
    }

    pub async fn run(&self) -> RunOutcome {
        self.run_at(Local::now().naive_local()).await
    }

    /// Run with an explicit timestamp for the alert header.
    pub async fn run_at(&self, now: NaiveDateTime) -> RunOutcome {
        let city = self.config.city.as_str();

        tracing::info!(city, "Fetching weather data");
        let reading = match self.provider.current(city).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching weather");
                let notice_sent = self.deliver(FETCH_FAILURE_NOTICE).await;
                return RunOutcome::FetchFailed { notice_sent };
            }
        };

        tracing::info!("Analyzing weather conditions");
        let evaluation = evaluate(&reading, &self.config.thresholds);

        if !evaluation.has_alerts {
            tracing::info!(
                temperature_c = reading.temperature_c,
                wind_mps = reading.wind_speed_mps,
                humidity_pct = reading.humidity_pct,
                "No alerts, weather conditions are normal"
            );
            return RunOutcome::AllClear(evaluation);
        }

        tracing::warn!(
            alerts = evaluation.alerts.len(),
            "Alerts detected, sending notification"
        );
        let message = format_alert_message(city, now, &evaluation);
        let delivered = self.deliver(&message).await;

        if delivered {
            tracing::info!("Alert sent successfully");
        } else {
            tracing::error!("Failed to send alert");
        }

        RunOutcome::Alerted {
            evaluation,
            delivered,
        }
    }

    async fn deliver(&self, text: &str) -> bool {
        match self.notifier.send(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Error sending message");
                false
            }
        }
    }
}
