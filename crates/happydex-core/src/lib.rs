//! Shared types and configuration for the happiness index workspace.

mod app_config;
mod config;
mod source;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use source::Source;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown source: {0}")]
    UnknownSource(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
