//! Error types for runcred-core

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown credential kind: {0}")]
    UnknownKind(String),

    #[error("Failed to write secret file in {dir}: {source}")]
    SecretWrite {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot map {path} into the execution environment: not under private data dir {private_data_dir}")]
    Translation {
        path: PathBuf,
        private_data_dir: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
