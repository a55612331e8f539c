use std::env;
use std::fmt;
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.wise.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Basic,
    Bearer,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::Bearer => "Bearer",
        })
    }
}

/// Connection settings for the Wise API.
///
/// Built once at startup and handed to the client; nothing is read from the environment after
/// that.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub auth_scheme: AuthScheme,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Read settings from the process environment, after loading `.env` if one exists.
    ///
    /// | Variable           | Default                   |
    /// |--------------------|---------------------------|
    /// | `WISE_API_TOKEN`   | required                  |
    /// | `WISE_API_URL`     | `https://api.wise.com/v1` |
    /// | `WISE_AUTH_SCHEME` | `Basic`                   |
    /// | `WISE_API_TIMEOUT` | `30` (seconds)            |
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = var("WISE_API_TOKEN")
            .ok_or_else(|| Error::Config("WISE_API_TOKEN is not set".to_string()))?;

        let base_url = var("WISE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let auth_scheme = match var("WISE_AUTH_SCHEME") {
            None => AuthScheme::Basic,
            Some(s) => match s.trim().to_ascii_lowercase().as_str() {
                "basic" => AuthScheme::Basic,
                "bearer" => AuthScheme::Bearer,
                _ => {
                    return Err(Error::Config(format!(
                        "WISE_AUTH_SCHEME must be Basic or Bearer, got '{s}'"
                    )));
                }
            },
        };

        let timeout = match var("WISE_API_TIMEOUT") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(s) => s.trim().parse().map(Duration::from_secs).map_err(|_| {
                Error::Config(format!("WISE_API_TIMEOUT must be whole seconds, got '{s}'"))
            })?,
        };

        Ok(Config {
            base_url,
            token: token.trim().to_string(),
            auth_scheme,
            timeout,
        })
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("{} {}", self.auth_scheme, self.token)
    }
}
