//! Runtime configuration, read from the environment (and `.env` if present).

use std::env;
use std::net::SocketAddr;

use url::Url;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {reason}")]
    BindAddr { value: String, reason: String },

    #[error("invalid MAX_WORKERS '{0}'")]
    MaxWorkers(String),
}

/// Why the remote store is switched off. Logged once, when the store is picked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreDisabled {
    #[error("SUPABASE_URL and SUPABASE_ANON_KEY are not set")]
    NotConfigured,

    #[error("only one of SUPABASE_URL / SUPABASE_ANON_KEY is set")]
    Partial,

    #[error("SUPABASE_URL '{value}' is not a valid URL ({reason})")]
    InvalidUrl { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// `Err` means the remote store is disabled and the demo catalog is served.
    pub store: Result<StoreCredentials, StoreDisabled>,
}

/// Endpoint and access key for the hosted listing store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreCredentials {
    pub url: Url,
    pub anon_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr {
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::MaxWorkers(v)),
            },
            None => DEFAULT_MAX_WORKERS,
        };

        let url = get("SUPABASE_URL").or_else(|| get("VITE_SUPABASE_URL"));
        let key = get("SUPABASE_ANON_KEY").or_else(|| get("VITE_SUPABASE_ANON_KEY"));

        let store = match (url, key) {
            (Some(url), Some(anon_key)) => match Url::parse(&url) {
                Ok(url) => Ok(StoreCredentials { url, anon_key }),
                Err(e) => Err(StoreDisabled::InvalidUrl {
                    value: url,
                    reason: e.to_string(),
                }),
            },
            (None, None) => Err(StoreDisabled::NotConfigured),
            _ => Err(StoreDisabled::Partial),
        };

        Ok(Self {
            bind_addr,
            max_workers,
            store,
        })
    }
}
