use reqwest::StatusCode;

/// Startup failure while assembling [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Environment variable {0} is set but empty")]
    EmptyVar(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Anything that went wrong while obtaining a weather reading.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to send request to {provider}: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse {provider} JSON: {source}")]
    Malformed {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that went wrong while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Failed to send request to {notifier}: {source}")]
    Transport {
        notifier: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{notifier} rejected message with status {status}: {body}")]
    Status {
        notifier: &'static str,
        status: StatusCode,
        body: String,
    },
}

/// Shorten a response body before it ends up in a log line.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
