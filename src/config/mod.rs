/// Configuration errors
pub mod error;
/// The configuration file
pub mod globalconfig;
/// Where the configuration lives
pub mod xdg;

pub use error::ConfigError;
pub use globalconfig::GlobalConfig;
