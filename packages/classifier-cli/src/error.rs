use std::path::PathBuf;

use diagnostic_style_algo::{ConfigError, InputError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("session {session}: {source}")]
    Input {
        session: usize,
        #[source]
        source: InputError,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => 74,
            CliError::Json { .. } | CliError::Input { .. } => 65,
            CliError::Config(_) => 78,
            CliError::Encode(_) => 70,
        }
    }
}
