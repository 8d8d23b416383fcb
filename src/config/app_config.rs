use std::time::Duration;

use reqwest::Url;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVariable { name: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub confluence_base_url: String,
    pub confluence_email: Option<String>,
    pub confluence_api_token: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let confluence_base_url = read("CONFLUENCE_BASE_URL")
            .ok_or(ConfigError::MissingVariable("CONFLUENCE_BASE_URL"))?;
        let parsed = Url::parse(&confluence_base_url).map_err(|e| ConfigError::InvalidVariable {
            name: "CONFLUENCE_BASE_URL",
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidVariable {
                name: "CONFLUENCE_BASE_URL",
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let confluence_api_token = read("CONFLUENCE_API_TOKEN")
            .ok_or(ConfigError::MissingVariable("CONFLUENCE_API_TOKEN"))?;

        let port = match read("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVariable {
                name: "PORT",
                reason: format!("{raw} is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_seconds = match read("CONFLUENCE_TIMEOUT_SECONDS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(seconds) if seconds > 0 => seconds,
                _ => {
                    return Err(ConfigError::InvalidVariable {
                        name: "CONFLUENCE_TIMEOUT_SECONDS",
                        reason: format!("{raw} is not a positive number of seconds"),
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            port,
            confluence_base_url: confluence_base_url.trim_end_matches('/').to_string(),
            confluence_email: read("CONFLUENCE_EMAIL"),
            confluence_api_token,
            request_timeout: Duration::from_secs(timeout_seconds),
        })
    }
}
