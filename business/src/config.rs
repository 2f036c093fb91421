use serde::Deserialize;
use thiserror::Error;

use crate::selection::SelectAllPolicy;

/// Static members resource loaded on startup.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
    #[error("ADMINUI_MEMBERS_URL must not be empty")]
    EmptyMembersUrl,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    adminui_members_url: Option<String>,
    adminui_select_all: Option<SelectAllPolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub members_url: String,
    pub select_all_policy: SelectAllPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

impl AppConfig {
    pub fn new(members_url: impl Into<String>) -> Self {
        Self {
            members_url: members_url.into(),
            select_all_policy: SelectAllPolicy::default(),
        }
    }

    pub fn with_select_all_policy(mut self, policy: SelectAllPolicy) -> Self {
        self.select_all_policy = policy;
        self
    }

    /// Defaults overridden by `ADMINUI_MEMBERS_URL` and `ADMINUI_SELECT_ALL`
    /// (`page_scoped` or `legacy`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let mut config = Self::default();

        if let Some(url) = raw.adminui_members_url {
            if url.trim().is_empty() {
                return Err(ConfigError::EmptyMembersUrl);
            }
            config.members_url = url;
        }
        if let Some(policy) = raw.adminui_select_all {
            config.select_all_policy = policy;
        }

        Ok(config)
    }
}
