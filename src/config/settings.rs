// * Run configuration, loaded once from the environment and immutable afterwards

use crate::config::constants::{
    ENV_API_DOMAIN, ENV_APPROVAL_PATH, ENV_LOG_FORMAT, ENV_ROUTING_NUMBER, ENV_STRICT_RECORDS,
    ENV_TOKEN, ENV_TOLL_FREE_NUMBER,
};
use crate::network::secret::Credentials;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing or empty environment variable {0}")]
    Missing(&'static str),

    #[error("{0} must have the form 'username:password'")]
    MalformedToken(&'static str),

    #[error("{0} is not a valid API host or base URL")]
    InvalidDomain(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    // * Read on its own so logging can start before the rest of the config is validated
    pub fn from_env() -> Self {
        Self::parse(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
    }

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub approval_path: String,
    pub routing_number: String,
    pub toll_free_number: String,
    // * Exit nonzero when any record fails to provision
    pub strict_records: bool,
}

impl Config {
    // * Reads the process environment
    // * Returns the main-account credentials separately so they can be dropped after login
    pub fn from_env() -> Result<(Self, Credentials), ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<(Self, Credentials), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let raw_token = zeroize::Zeroizing::new(required(ENV_TOKEN)?);
        let api_domain = required(ENV_API_DOMAIN)?;
        let approval_path = required(ENV_APPROVAL_PATH)?;
        let routing_number = required(ENV_ROUTING_NUMBER)?;
        let toll_free_number = required(ENV_TOLL_FREE_NUMBER)?;

        let credentials =
            Credentials::from_pair(&raw_token).ok_or(ConfigError::MalformedToken(ENV_TOKEN))?;
        drop(raw_token);

        let api_base = parse_api_base(&api_domain)?;

        let strict_records = lookup(ENV_STRICT_RECORDS)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = Self {
            api_base,
            approval_path,
            routing_number,
            toll_free_number,
            strict_records,
        };

        Ok((config, credentials))
    }
}

// * Accepts a bare host (https implied) or a full http(s) base URL
fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim().trim_end_matches('/');
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let url = Url::parse(&candidate).map_err(|_| ConfigError::InvalidDomain(ENV_API_DOMAIN))?;
    if url.host_str().is_none() || url.path() != "/" {
        return Err(ConfigError::InvalidDomain(ENV_API_DOMAIN));
    }
    Ok(url)
}
