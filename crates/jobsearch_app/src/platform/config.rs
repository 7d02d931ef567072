use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobsearch_core::{Selection, UnknownOption};
use jobsearch_engine::{SearchSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Cli;
use super::logging::LogDestination;
use super::ui::input::{parse_location, parse_role};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "jobsearch.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid selection in config: {0}")]
    Selection(#[from] UnknownOption),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log_level: String,
    pub log_destination: LogDestination,
    pub default_role: String,
    pub default_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let search = SearchSettings::default();
        let selection = Selection::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir: PathBuf::from(".jobsearch"),
            connect_timeout_secs: search.connect_timeout.as_secs(),
            request_timeout_secs: search.request_timeout.as_secs(),
            max_response_bytes: search.max_bytes,
            log_level: "info".to_string(),
            log_destination: LogDestination::File,
            default_role: selection.role.label().to_string(),
            default_location: selection.location.label().to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `path`, or `./jobsearch.ron` if it exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Command-line flags win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(state_dir) = &cli.state_dir {
            self.state_dir = state_dir.clone();
        }
        if let Some(role) = &cli.role {
            self.default_role = role.clone();
        }
        if let Some(location) = &cli.location {
            self.default_location = location.clone();
        }
        if let Some(destination) = cli.log_destination {
            self.log_destination = destination;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn selection(&self) -> Result<Selection, ConfigError> {
        Ok(Selection::new(
            parse_role(&self.default_role)?,
            parse_location(&self.default_location)?,
        ))
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
            ..SearchSettings::default()
        }
    }
}
