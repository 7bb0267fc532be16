//! Configuration module

use std::env;
use std::net::IpAddr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("API_BASE_URL is not defined. Create a .env file with API_BASE_URL=http://localhost:8000")]
    MissingBaseUrl,

    #[error("API_BASE_URL '{value}' is invalid: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prediction service base URL, without trailing slash
    pub api_base_url: String,

    /// Listen address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Idle sessions older than this are pruned
    pub session_idle_minutes: i64,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        Ok(Self {
            api_base_url: normalize_base_url(&raw_base_url)?,

            host: parse_or("HOST", lookup("HOST"), IpAddr::from([0, 0, 0, 0]))?,

            port: parse_or("PORT", lookup("PORT"), 8080)?,

            session_idle_minutes: parse_or(
                "SESSION_IDLE_MINUTES",
                lookup("SESSION_IDLE_MINUTES"),
                60,
            )?,

            log_format: match lookup("LOG_FORMAT").as_deref() {
                None | Some("pretty") => LogFormat::Pretty,
                Some("json") => LogFormat::Json,
                Some(other) => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT",
                        value: other.to_string(),
                    })
                }
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

/// Check that the base URL is an absolute http(s) URL and drop trailing slashes
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let url = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        value: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
