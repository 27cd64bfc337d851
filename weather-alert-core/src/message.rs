//! Telegram-ready (HTML parse mode) message bodies.

use chrono::NaiveDateTime;

use crate::model::EvaluationResult;

/// Sent instead of an alert when no reading could be obtained.
pub const FETCH_FAILURE_NOTICE: &str = "❌ Failed to fetch weather data";

/// Build the alert message for a run where at least one rule fired.
pub fn format_alert_message(city: &str, at: NaiveDateTime, eval: &EvaluationResult) -> String {
    let reading = &eval.reading;

    format!(
        "🚨 <b>Weather Alert</b> 🚨\n\
         \n\
         📍 <b>{city}</b>\n\
         🕐 {at}\n\
         \n\
         <b>⚠️ Alerts:</b>\n\
         {alerts}\n\
         \n\
         <b>📊 Current conditions:</b>\n\
         🌡️ Temperature: {temp:.1}°C (feels like {feels:.1}°C)\n\
         💨 Wind: {wind:.1} m/s ({kmh:.1} km/h) from the {dir}\n\
         💧 Humidity: {humidity}%\n\
         ☁️ Conditions: {description}\n\
         \n\
         <b>💡 Recommendations:</b>\n\
         {recommendations}\n\
         \n\
         <i>Stay alert and stay safe!</i> 🙏",
        city = escape_html(city),
        at = at.format("%Y-%m-%d %H:%M"),
        alerts = eval.alerts.join("\n"),
        temp = reading.temperature_c,
        feels = reading.feels_like_c,
        wind = reading.wind_speed_mps,
        kmh = eval.wind_kmh,
        dir = eval.wind_direction,
        humidity = reading.humidity_pct,
        description = escape_html(&reading.description),
        recommendations = eval.recommendations.join("\n"),
    )
}

/// Escape the characters Telegram's HTML parser treats as markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ThresholdSet, evaluate::evaluate, model::WeatherReading};
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 28)
            .unwrap()
            .and_hms_opt(14, 5, 33)
            .unwrap()
    }

    fn stormy() -> EvaluationResult {
        let reading = WeatherReading {
            temperature_c: 36.0,
            feels_like_c: 41.0,
            humidity_pct: 85,
            wind_speed_mps: 12.0,
            wind_deg: 135,
            description: "thunderstorm with rain".into(),
        };
        evaluate(&reading, &ThresholdSet::default())
    }

    #[test]
    fn alert_message_has_header_and_timestamp() {
        let msg = format_alert_message("Yangon", at(), &stormy());

        assert!(msg.starts_with("🚨 <b>Weather Alert</b> 🚨\n\n📍 <b>Yangon</b>\n🕐 2024-04-28 14:05\n"));
        assert!(msg.ends_with("<i>Stay alert and stay safe!</i> 🙏"));
    }

    #[test]
    fn alert_message_embeds_alerts_then_snapshot_then_recommendations() {
        let eval = stormy();
        let msg = format_alert_message("Yangon", at(), &eval);

        let alerts_at = msg.find("<b>⚠️ Alerts:</b>").unwrap();
        let snapshot_at = msg.find("<b>📊 Current conditions:</b>").unwrap();
        let recs_at = msg.find("<b>💡 Recommendations:</b>").unwrap();
        assert!(alerts_at < snapshot_at && snapshot_at < recs_at);

        let mut cursor = alerts_at;
        for alert in &eval.alerts {
            let pos = msg[cursor..].find(alert.as_str()).expect("alert missing") + cursor;
            assert!(pos < snapshot_at);
            cursor = pos;
        }

        let mut cursor = recs_at;
        for rec in &eval.recommendations {
            let pos = msg[cursor..].find(rec.as_str()).expect("recommendation missing") + cursor;
            cursor = pos + rec.len();
        }
        assert!(cursor < msg.len());
    }

    #[test]
    fn alert_message_snapshot_lines() {
        let msg = format_alert_message("Yangon", at(), &stormy());

        assert!(msg.contains("🌡️ Temperature: 36.0°C (feels like 41.0°C)\n"));
        assert!(msg.contains("💨 Wind: 12.0 m/s (43.2 km/h) from the SE\n"));
        assert!(msg.contains("💧 Humidity: 85%\n"));
        assert!(msg.contains("☁️ Conditions: thunderstorm with rain\n"));
    }

    #[test]
    fn dynamic_text_is_html_escaped() {
        let mut eval = stormy();
        eval.reading.description = "rain & <fog>".into();

        let msg = format_alert_message("Yangon", at(), &eval);
        assert!(msg.contains("rain &amp; &lt;fog&gt;"));
    }
}
