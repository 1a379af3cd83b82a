pub mod config;
pub mod preview;
pub mod report;

use std::path::PathBuf;

pub use config::{Config, EnvFile, EnvSource, Layered, ProcessEnv};
pub use preview::Preview;
pub use report::{check, Report};

#[derive(Debug, thiserror::Error)]
pub enum KeycheckError {
    #[error("Failed to read settings file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

pub type Result<T> = std::result::Result<T, KeycheckError>;
