//! Service endpoint configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BITSTATUS_BASE_URL` | `https://api.coindesk.com` | BPI service root |
//! | `BITSTATUS_TIMEOUT_MS` | `3000` | Per-request timeout |
//! | `BITSTATUS_HISTORY_DAYS` | `30` | Length of the historical window |
//! | `BITSTATUS_USER_AGENT` | `bitstatus/<version>` | `User-Agent` sent with every request |

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.coindesk.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_HISTORY_DAYS: u16 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("bitstatus/", env!("CARGO_PKG_VERSION"));

const BASE_URL_VAR: &str = "BITSTATUS_BASE_URL";
const TIMEOUT_VAR: &str = "BITSTATUS_TIMEOUT_MS";
const HISTORY_DAYS_VAR: &str = "BITSTATUS_HISTORY_DAYS";
const USER_AGENT_VAR: &str = "BITSTATUS_USER_AGENT";

/// Settings shared by every lookup; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    timeout_ms: u64,
    history_days: u16,
    user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            history_days: DEFAULT_HISTORY_DAYS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by any `BITSTATUS_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&value)?;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            config = config.with_timeout_ms(parse_positive(TIMEOUT_VAR, &value)?)?;
        }
        if let Some(value) = lookup(HISTORY_DAYS_VAR) {
            let days = parse_positive(HISTORY_DAYS_VAR, &value)?;
            let days = u16::try_from(days).map_err(|_| ConfigError::NotPositiveInteger {
                key: HISTORY_DAYS_VAR,
                value: value.clone(),
            })?;
            config = config.with_history_days(days)?;
        }
        if let Some(value) = lookup(USER_AGENT_VAR) {
            config = config.with_user_agent(&value)?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                key: BASE_URL_VAR,
                value: base_url.to_owned(),
            });
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::NotPositiveInteger {
                key: TIMEOUT_VAR,
                value: timeout_ms.to_string(),
            });
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_history_days(mut self, history_days: u16) -> Result<Self, ConfigError> {
        if history_days == 0 {
            return Err(ConfigError::NotPositiveInteger {
                key: HISTORY_DAYS_VAR,
                value: history_days.to_string(),
            });
        }
        self.history_days = history_days;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ConfigError> {
        let trimmed = user_agent.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyValue {
                key: USER_AGENT_VAR,
            });
        }
        self.user_agent = trimmed.to_owned();
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub const fn history_days(&self) -> u16 {
        self.history_days
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::NotPositiveInteger {
            key,
            value: value.to_owned(),
        }),
    }
}
