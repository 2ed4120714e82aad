use crate::api::error::ApiError;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `$HOME` is not set
    #[error("Unable to find the home directory")]
    NoHome,
    /// Reading or writing the file failed
    #[error("Unable to access the configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON
    #[error("Configuration file is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// Endpoint could not be parsed
    #[error("Remote URL specified is not in a valid format: {0}")]
    BadEndpoint(String),
    /// The client could not be built from this configuration
    #[error("Unable to build a client: {0}")]
    Client(#[from] ApiError),
}
