//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the backend address
pub const API_URL_ENV: &str = "INVOICE_API_URL";

/// Environment variable overriding the downloads folder
pub const DOWNLOAD_DIR_ENV: &str = "INVOICE_DOWNLOAD_DIR";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base URL
    pub api_base_url: Option<String>,
    /// Folder generated invoices are saved into
    pub download_dir: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "invoice", "invoice-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: TuiConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Resolve the backend address: environment, then config file, then default
    pub fn resolve_api_base_url(&self) -> String {
        self.resolve_api_base_url_with(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url_with(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Resolve the downloads folder: environment, then config file, then the
    /// user's downloads folder, then the current directory
    pub fn resolve_download_dir(&self) -> PathBuf {
        let user_downloads = UserDirs::new().and_then(|d| d.download_dir().map(Path::to_path_buf));
        self.resolve_download_dir_with(
            std::env::var_os(DOWNLOAD_DIR_ENV).map(PathBuf::from),
            user_downloads,
        )
    }

    fn resolve_download_dir_with(
        &self,
        env_value: Option<PathBuf>,
        user_downloads: Option<PathBuf>,
    ) -> PathBuf {
        env_value
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.download_dir.clone())
            .or(user_downloads)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
