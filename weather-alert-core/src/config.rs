use std::{fmt, time::Duration};

use crate::error::ConfigError;

/// City the bot watches.
pub const DEFAULT_CITY: &str = "Yangon";

/// Per-request timeout for both the weather fetch and the notification.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const ENV_CHAT_ID: &str = "CHAT_ID";
pub const ENV_WEATHER_API_KEY: &str = "WEATHER_API_KEY";

/// Hazard limits the evaluator compares readings against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    /// °C, alert at or above.
    pub temp_high: f64,
    /// °C, alert at or below.
    pub temp_low: f64,
    /// m/s, alert at or above.
    pub wind_speed: f64,
    /// %, alert at or above.
    pub humidity_high: u8,
    /// °C, alert at or above.
    pub feels_like_high: f64,
    /// Reserved. No UV source is wired in, so no rule reads this.
    pub uv_high: f64,
    /// Reserved, see `uv_high`.
    pub uv_extreme: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            temp_high: 35.0,
            temp_low: 10.0,
            wind_speed: 10.0,
            humidity_high: 80,
            feels_like_high: 40.0,
            uv_high: 8.0,
            uv_extreme: 11.0,
        }
    }
}

/// Everything one run needs, assembled once at startup.
#[derive(Clone)]
pub struct Config {
    pub city: String,
    pub weather_api_key: String,
    pub telegram_token: String,
    pub chat_id: String,
    pub thresholds: ThresholdSet,
    pub http_timeout: Duration,
}

impl Config {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or(ConfigError::MissingVar(name))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::EmptyVar(name));
            }
            Ok(value.to_string())
        };

        Ok(Self {
            city: DEFAULT_CITY.to_string(),
            telegram_token: require(ENV_TELEGRAM_TOKEN)?,
            chat_id: require(ENV_CHAT_ID)?,
            weather_api_key: require(ENV_WEATHER_API_KEY)?,
            thresholds: ThresholdSet::default(),
            http_timeout: HTTP_TIMEOUT,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("city", &self.city)
            .field("weather_api_key", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("thresholds", &self.thresholds)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn full() -> HashMap<String, String> {
        vars(&[
            (ENV_TELEGRAM_TOKEN, "123:abc"),
            (ENV_CHAT_ID, "-100200300"),
            (ENV_WEATHER_API_KEY, "owm-key"),
        ])
    }

    #[test]
    fn from_lookup_reads_all_credentials() {
        let env = full();
        let cfg = Config::from_lookup(|k| env.get(k).cloned()).expect("config must load");

        assert_eq!(cfg.city, "Yangon");
        assert_eq!(cfg.telegram_token, "123:abc");
        assert_eq!(cfg.chat_id, "-100200300");
        assert_eq!(cfg.weather_api_key, "owm-key");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
        assert_eq!(cfg.thresholds, ThresholdSet::default());
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        for name in [ENV_TELEGRAM_TOKEN, ENV_CHAT_ID, ENV_WEATHER_API_KEY] {
            let mut env = full();
            env.remove(name);

            let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
            assert!(matches!(err, ConfigError::MissingVar(n) if n == name));
            assert!(err.to_string().contains(name));
        }
    }

    #[test]
    fn blank_variable_is_rejected() {
        let mut env = full();
        env.insert(ENV_CHAT_ID.to_string(), "   ".to_string());

        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVar(ENV_CHAT_ID)));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let env = full();
        let cfg = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        let dbg = format!("{cfg:?}");

        assert!(!dbg.contains("123:abc"));
        assert!(!dbg.contains("owm-key"));
        assert!(dbg.contains("Yangon"));
    }

    #[test]
    fn default_thresholds_match_alert_limits() {
        let t = ThresholdSet::default();

        assert_eq!(t.temp_high, 35.0);
        assert_eq!(t.temp_low, 10.0);
        assert_eq!(t.wind_speed, 10.0);
        assert_eq!(t.humidity_high, 80);
        assert_eq!(t.feels_like_high, 40.0);
    }
}
