use std::fmt;

use serde::{Deserialize, Serialize};

/// Current conditions for the watched city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Meteorological degrees the wind blows from; 0 when the provider omits it.
    pub wind_deg: u16,
    pub description: String,
}

impl WeatherReading {
    pub fn wind_speed_kmh(&self) -> f64 {
        mps_to_kmh(self.wind_speed_mps)
    }

    pub fn wind_direction(&self) -> CompassPoint {
        CompassPoint::from_degrees(f64::from(self.wind_deg))
    }
}

pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

/// Eight-way wind rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const ROSE: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Each sector spans 45° centred on its point, so N covers [337.5, 22.5).
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = ((degrees + 22.5) / 45.0).floor() as i64;
        Self::ROSE[sector.rem_euclid(8) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one reading against the thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub has_alerts: bool,
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
    pub reading: WeatherReading,
    pub wind_kmh: f64,
    pub wind_direction: CompassPoint,
}
