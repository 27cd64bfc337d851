//! Threshold checks over a single [`WeatherReading`].
//!
//! Rules run in a fixed order (heat, cold, feels-like, wind, humidity) and are
//! independent of each other, so any combination can fire in one pass. Every
//! comparison is inclusive at the limit.

use crate::{
    config::ThresholdSet,
    model::{EvaluationResult, WeatherReading},
};

pub fn evaluate(reading: &WeatherReading, thresholds: &ThresholdSet) -> EvaluationResult {
    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();

    let wind_kmh = reading.wind_speed_kmh();
    let wind_direction = reading.wind_direction();

    if reading.temperature_c >= thresholds.temp_high {
        alerts.push(format!("🔥 Temperature very high: {:.1}°C", reading.temperature_c));
        recommendations.push("💧 Drink plenty of water".to_string());
        recommendations.push("🏠 Stay indoors during the hottest hours".to_string());
    }

    if reading.temperature_c <= thresholds.temp_low {
        alerts.push(format!("❄️ Temperature very low: {:.1}°C", reading.temperature_c));
        recommendations.push("🧥 Wear warm clothing".to_string());
    }

    if reading.feels_like_c >= thresholds.feels_like_high {
        alerts.push(format!(
            "🌡️ Feels-like temperature very high: {:.1}°C",
            reading.feels_like_c
        ));
        recommendations.push("☀️ Avoid direct sunlight".to_string());
    }

    if reading.wind_speed_mps >= thresholds.wind_speed {
        alerts.push(format!(
            "💨 Strong wind: {:.1} m/s ({:.1} km/h) from the {}",
            reading.wind_speed_mps, wind_kmh, wind_direction
        ));
        recommendations.push("⚠️ Take care when going outside".to_string());
        recommendations.push("🌲 Keep away from trees and signboards".to_string());
    }

    if reading.humidity_pct >= thresholds.humidity_high {
        alerts.push(format!("💦 Very humid: {}%", reading.humidity_pct));
        recommendations.push("🌬️ Keep rooms well ventilated".to_string());
    }

    // uv_high / uv_extreme stay unchecked until a real UV source exists.

    tracing::debug!(
        alerts = alerts.len(),
        recommendations = recommendations.len(),
        "Evaluated weather reading"
    );

    EvaluationResult {
        has_alerts: !alerts.is_empty(),
        alerts,
        recommendations,
        reading: reading.clone(),
        wind_kmh,
        wind_direction,
    }
}
