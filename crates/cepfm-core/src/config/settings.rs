//! Application configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::scan::ScanLimits;
use crate::nav::filter::{SortDirection, SortField};

/// Top-level engine configuration.
///
/// All fields have defaults so the engine works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Resolves the configured default sort into typed values.
    /// Unrecognised strings fall back to name ascending.
    pub fn sort_options(&self) -> (SortField, SortDirection) {
        let field = match self.general.default_sort.as_str() {
            "size" => SortField::Size,
            _ => SortField::Name,
        };
        let direction = match self.general.default_direction.as_str() {
            "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        (field, direction)
    }

    /// Returns the configured scan caps.
    pub fn scan_limits(&self) -> ScanLimits {
        ScanLimits {
            max_depth: self.scan.max_depth,
            max_results: self.scan.max_results,
        }
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_direction")]
    pub default_direction: String,
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            default_sort: default_sort(),
            default_direction: default_direction(),
            confirm_delete: true,
        }
    }
}

/// Category-scan caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_results: default_max_results(),
        }
    }
}

fn default_sort() -> String {
    "name".to_string()
}

fn default_direction() -> String {
    "ascending".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    20
}

fn default_max_results() -> usize {
    10_000
}
