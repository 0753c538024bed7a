//! Ratings API endpoint configuration, read from the environment.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_AUTHORITIES_URL: &str = "https://api.ratings.food.gov.uk/Authorities/basic";
pub const DEFAULT_ESTABLISHMENTS_URL: &str =
    "https://api.ratings.food.gov.uk/Establishments?localAuthorityId={authorityId}";
pub const DEFAULT_API_VERSION: &str = "2";

/// Placeholder replaced by the authority id in the establishments URL.
pub const AUTHORITY_ID_PLACEHOLDER: &str = "{authorityId}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub authorities_url: String,
    /// URL template containing [`AUTHORITY_ID_PLACEHOLDER`].
    pub establishments_url: String,
    pub api_version: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            authorities_url: DEFAULT_AUTHORITIES_URL.to_string(),
            establishments_url: DEFAULT_ESTABLISHMENTS_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Reads `FSA_API_*` variables from the process environment, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seconds = |var: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => {
                    let parsed = value.trim().parse::<u64>();
                    parsed
                        .map(Duration::from_secs)
                        .map_err(|_| ConfigError::InvalidSeconds { var, value })
                }
            }
        };

        Ok(Self {
            authorities_url: lookup("FSA_API_AUTHORITIES_URL").unwrap_or(defaults.authorities_url),
            establishments_url: lookup("FSA_API_ESTABLISHMENTS_URL")
                .unwrap_or(defaults.establishments_url),
            api_version: lookup("FSA_API_VERSION").unwrap_or(defaults.api_version),
            timeout: seconds("FSA_API_TIMEOUT_SECS", defaults.timeout)?,
            connect_timeout: seconds("FSA_API_CONNECT_TIMEOUT_SECS", defaults.connect_timeout)?,
        })
    }

    pub fn establishments_url(&self, authority_id: i64) -> String {
        self.establishments_url
            .replace(AUTHORITY_ID_PLACEHOLDER, &authority_id.to_string())
    }
}
