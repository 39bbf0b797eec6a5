use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::app_system::ConfigError;
use crate::view_model::DEFAULT_PAGE_SIZE;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "order-desk.toml";

/// Prefix of the environment overrides, e.g. `ORDER_DESK__ENDPOINT`.
pub const ENV_PREFIX: &str = "ORDER_DESK__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// GraphQL endpoint serving both queries and the mutation.
    pub endpoint: String,
    /// Rows per page. Drives both the sequential numbering and the table window.
    pub page_size: usize,
    pub request_timeout_secs: u64,
    /// Sent as a bearer token when set.
    pub auth_token: Option<String>,
    /// Roll a status selection back when its mutation fails.
    pub revert_on_mutation_failure: bool,
    /// Channel capacity of each view actor.
    pub actor_buffer: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".into(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
            auth_token: None,
            revert_on_mutation_failure: false,
            actor_buffer: 32,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        reason: format!("cannot parse {raw:?}"),
    })
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `ORDER_DESK__*` overrides found through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = var("PAGE_SIZE") {
            self.page_size = parse_env("page_size", &v)?;
        }
        if let Some(v) = var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_env("request_timeout_secs", &v)?;
        }
        if let Some(v) = var("AUTH_TOKEN") {
            self.auth_token = Some(v).filter(|token| !token.is_empty());
        }
        if let Some(v) = var("REVERT_ON_MUTATION_FAILURE") {
            self.revert_on_mutation_failure = parse_env("revert_on_mutation_failure", &v)?;
        }
        if let Some(v) = var("ACTOR_BUFFER") {
            self.actor_buffer = parse_env("actor_buffer", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: "must not be empty".into(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size",
                reason: "must be at least 1".into(),
            });
        }
        if self.actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "actor_buffer",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Defaults, then the config file, then the environment.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Settings::from_file(&default_path)?
            } else {
                Settings::default()
            }
        }
    };
    settings.apply_env(|key| std::env::var(key).ok())?;
    debug!(endpoint = %settings.endpoint, page_size = settings.page_size, "Settings loaded");
    Ok(settings)
}
