use super::specifiers::PoolSpecifier;
use crate::{api::error::ApiError, config::ConfigError};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// The registrar or the console refused
    #[error("{0}")]
    Api(#[from] ApiError),
    /// The configuration could not be used
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// No listed pool matches
    #[error("Unable to find a Pool with {0}")]
    UnknownPool(String),
}

impl CliError {
    pub(crate) fn unknown_pool(specifier: &PoolSpecifier) -> Self {
        Self::UnknownPool(specifier.to_string())
    }
}
