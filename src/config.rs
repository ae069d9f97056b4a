use std::fmt;

use chrono::{Datelike, Local};
use tracing::debug;

use crate::error::ConfigError;

pub const ACCOUNT_ID_ENV: &str = "ACCOUNT_ID";
pub const API_TOKEN_ENV: &str = "API_TOKEN";
pub const BASE_URL_ENV: &str = "HARVEST_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/api/v2/";

/// Harvest account id and personal access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub api_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Everything the filler needs to know before it makes a request.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// API root, always ending in `/`.
    pub base_url: String,
    pub credentials: Credentials,
    /// ISO year the week numbers refer to.
    pub year: i32,
}

impl HarvestConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            year: Local::now().year(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = lookup(ACCOUNT_ID_ENV).ok_or(ConfigError::MissingVar(ACCOUNT_ID_ENV))?;
        let api_token = lookup(API_TOKEN_ENV).ok_or(ConfigError::MissingVar(API_TOKEN_ENV))?;

        let mut config = Self::new(Credentials {
            account_id,
            api_token,
        });
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            config = config.with_base_url(base_url);
        }

        debug!(
            "Loaded configuration for account {} against {}",
            config.credentials.account_id, config.base_url
        );
        Ok(config)
    }
}
