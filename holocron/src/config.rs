//! Layered configuration: built-in defaults, then the JSON config file, then
//! environment variables, then command-line flags. Later layers win.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use holocron_core::source::DEFAULT_FILMS_URL;
use serde::{Deserialize, Serialize};
use url::Url;

pub const FILMS_URL_ENV: &str = "HOLOCRON_FILMS_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "HOLOCRON_REQUEST_TIMEOUT_SECS";

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub films_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// `$XDG_CONFIG_HOME/holocron/config.json` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("holocron").join("config.json"))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub films_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub films_url: Url,
    /// `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Resolve configuration from the process environment and `overrides`.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config_path {
            Some(path) => Some(ConfigFile::read(path)?),
            None => match ConfigFile::default_path() {
                Some(path) if path.exists() => Some(ConfigFile::read(&path)?),
                _ => None,
            },
        };

        Self::resolve(file.as_ref(), |key| std::env::var(key).ok(), overrides)
    }

    /// Apply the layers in order. `env` looks up one variable by name.
    pub fn resolve(
        file: Option<&ConfigFile>,
        env: impl Fn(&str) -> Option<String>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let mut films_url = DEFAULT_FILMS_URL.to_string();
        let mut timeout_secs = None;

        if let Some(file) = file {
            if let Some(url) = &file.films_url {
                films_url = url.clone();
            }
            timeout_secs = file.request_timeout_secs.or(timeout_secs);
        }

        if let Some(url) = env(FILMS_URL_ENV) {
            films_url = url;
        }
        if let Some(raw) = env(REQUEST_TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().with_context(|| {
                format!("{REQUEST_TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'")
            })?;
            timeout_secs = Some(secs);
        }

        if let Some(url) = &overrides.films_url {
            films_url = url.clone();
        }
        if let Some(secs) = overrides.request_timeout_secs {
            timeout_secs = Some(secs);
        }

        let films_url = Url::parse(&films_url)
            .with_context(|| format!("invalid films URL '{films_url}'"))?;
        anyhow::ensure!(
            matches!(films_url.scheme(), "http" | "https"),
            "films URL must use http or https, got '{films_url}'"
        );

        Ok(Self {
            films_url,
            // Zero disables the timeout
            request_timeout: timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}
