use crate::index::corpus::DirectoryOptions;
use crate::index::types::{ChildSelection, DEFAULT_MAX_MATCHES, IndexConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "autocomplete";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory of text files to index
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: PathBuf,

    /// Maximum number of suggestions per prompt
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,

    /// How a search picks among children one edit away from a query word
    #[serde(default)]
    pub child_selection: ChildSelection,

    /// Input that clears the accumulated prompt
    #[serde(default = "default_reset_token")]
    pub reset_token: String,

    /// Input that ends the interactive session
    #[serde(default = "default_exit_token")]
    pub exit_token: String,

    /// Glob patterns (relative to the dataset directory) to leave out
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Files larger than this are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Number of files kept in memory for line lookups
    #[serde(default = "default_line_cache_size")]
    pub line_cache_size: usize,
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("Dataset")
}

fn default_max_matches() -> usize {
    DEFAULT_MAX_MATCHES
}

fn default_reset_token() -> String {
    "#".to_string()
}

fn default_exit_token() -> String {
    "exit".to_string()
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

fn default_line_cache_size() -> usize {
    64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            max_matches: default_max_matches(),
            child_selection: ChildSelection::default(),
            reset_token: default_reset_token(),
            exit_token: default_exit_token(),
            exclude: Vec::new(),
            max_file_size: default_max_file_size(),
            line_cache_size: default_line_cache_size(),
        }
    }
}

impl AppConfig {
    /// Load config from `path`, or from the app data directory when `path` is `None`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path()?,
        };
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to `path`
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(config_path, content).context("Failed to write config file")?;
        Ok(())
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            max_matches: self.max_matches,
            child_selection: self.child_selection,
        }
    }

    pub fn directory_options(&self) -> DirectoryOptions {
        DirectoryOptions {
            exclude: self.exclude.clone(),
            max_file_size: self.max_file_size,
            line_cache_size: self.line_cache_size,
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_CONFIG_HOME or ~/.config
        dirs::config_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
