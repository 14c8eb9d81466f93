use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DocsError, Result};

/// Name of the optional configuration file stored inside the `.dapdocs` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory that may hold per-tree overrides.
pub const DAPDOCS_DIR: &str = ".dapdocs";

/// Environment variable naming the documentation root.
pub const DOCS_ROOT_ENV: &str = "PROJECT_ROOT";

/// Configuration of the documentation server.
///
/// Read once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Base directory that the category roots are resolved against.
    pub docs_root: PathBuf,
    /// Extension (without the dot) of the files treated as documents.
    pub extension: String,
    /// Maximum number of match contexts reported per document.
    pub max_matches_per_file: usize,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            docs_root: PathBuf::from("."),
            extension: "md".to_string(),
            max_matches_per_file: 5,
        }
    }
}

impl DocsConfig {
    /// Default configuration rooted at `docs_root`.
    pub fn with_root(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }
}

/// Returns the path to the `.dapdocs` directory within the given docs root.
pub fn get_dapdocs_dir(docs_root: &Path) -> PathBuf {
    docs_root.join(DAPDOCS_DIR)
}

/// Returns the path to the configuration file within the `.dapdocs` directory.
pub fn get_config_path(docs_root: &Path) -> PathBuf {
    get_dapdocs_dir(docs_root).join(CONFIG_FILENAME)
}

/// Picks the documentation root: explicit argument, then `PROJECT_ROOT`,
/// then the current directory.
pub fn resolve_docs_root(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DOCS_ROOT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration for a documentation tree.
///
/// If no configuration file exists, returns the defaults. The `docs_root`
/// field always reflects the root passed in, whatever the file says.
pub fn load_config(docs_root: &Path) -> Result<DocsConfig> {
    let config_path = get_config_path(docs_root);

    if !config_path.exists() {
        return Ok(DocsConfig::with_root(docs_root));
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| DocsError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: DocsConfig = serde_json::from_str(&contents).map_err(|e| DocsError::Config {
        message: format!(
            "failed to parse config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    if config.extension.trim_start_matches('.').is_empty() {
        return Err(DocsError::Config {
            message: format!("empty document extension in '{}'", config_path.display()),
        });
    }

    Ok(DocsConfig {
        docs_root: docs_root.to_path_buf(),
        extension: config.extension.trim_start_matches('.').to_string(),
        ..config
    })
}
