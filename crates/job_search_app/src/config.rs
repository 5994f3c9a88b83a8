//! Settings file for the `job-search` binary.
//!
//! Settings are read from RON. A missing default file means defaults; an
//! explicitly named file must exist.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use job_search_engine::{CatalogSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_FILENAME: &str = "job_search.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let catalog = CatalogSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: catalog.connect_timeout.as_secs(),
            request_timeout_secs: catalog.request_timeout.as_secs(),
            max_bytes: catalog.max_bytes,
            log_level: "info".to_string(),
            log_file: None,
            token: None,
        }
    }
}

impl Settings {
    pub fn catalog(&self) -> CatalogSettings {
        CatalogSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }
}

/// Loads `explicit` if given, otherwise `./job_search.ron` when present.
///
/// Also returns the file the settings came from, `None` for built-in defaults.
/// Nothing is logged here; the logger is configured from these settings.
pub fn load(explicit: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILENAME);
            if !path.exists() {
                return Ok((Settings::default(), None));
            }
            path
        }
    };
    let settings = read(&path)?;
    Ok((settings, Some(path)))
}

fn read(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    ron::from_str(&content)
        .with_context(|| format!("failed to parse settings in {}", path.display()))
}
