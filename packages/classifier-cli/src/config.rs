use std::path::{Path, PathBuf};

use diagnostic_style_algo::ClassifierConfig;

use crate::error::CliError;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub file_logs: bool,
    pub log_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            file_logs: false,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup("RUST_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let file_logs = lookup("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Self {
            log_level,
            file_logs,
            log_dir,
        }
    }
}

/// Classifier tuning for one run.
///
/// A JSON file replaces the built-in defaults (missing fields keep their
/// default); without one, `STYLE_*` environment overrides apply.
pub fn load_classifier_config(path: Option<&Path>) -> Result<ClassifierConfig, CliError> {
    let Some(path) = path else {
        return Ok(ClassifierConfig::from_env()?);
    };

    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ClassifierConfig = serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "classifier config loaded from file");
    Ok(config)
}
