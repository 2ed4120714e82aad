use super::{error::ConfigError, xdg::config_path};
use crate::api::client::{Client, Credentials};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs::{File, OpenOptions},
    time::Duration,
};
use tracing::{debug, warn};

/// Registrar address used until one is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8003";
/// Seconds before a request is abandoned
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Represents the Global contents of the configuration file in a user's .config
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct GlobalConfig {
    /// Version that wrote the file
    version: String,
    /// Origin of the registrar
    pub endpoint: Url,
    /// Path prefix in front of every API path
    #[serde(default)]
    pub base_path: String,
    /// How to authenticate to the front end
    #[serde(default)]
    pub credential: Credentials,
    /// Request timeout in seconds, zero disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoint: default_endpoint(),
            base_path: String::new(),
            credential: Credentials::None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The registrar a fresh configuration points at
pub fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("unable to parse known URLs")
}

impl GlobalConfig {
    /// Request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Point at a new registrar
    pub fn set_endpoint(&mut self, address: &str, base_path: Option<String>) -> Result<(), ConfigError> {
        self.endpoint =
            Url::parse(address).map_err(|err| ConfigError::BadEndpoint(format!("{address}: {err}")))?;
        if let Some(base_path) = base_path {
            self.base_path = base_path.trim_end_matches('/').to_string();
        }
        Ok(())
    }

    /// Get the Client data
    pub fn get_client(&self) -> Result<Client, ConfigError> {
        Ok(Client::with_credentials(
            self.endpoint.as_str(),
            &self.base_path,
            self.credential.clone(),
            self.timeout(),
        )?)
    }

    /// Write to disk
    pub fn to_disk(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        let writer = OpenOptions::new()
            .create(true)
            .append(false)
            .truncate(true)
            .write(true)
            .open(&path)?;

        serde_json::to_writer_pretty(writer, &self)?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Initialize from file on disk, writing a default one if there is none
    pub fn from_disk() -> Result<Self, ConfigError> {
        let path = config_path()?;
        match File::open(&path) {
            Ok(file) => Ok(serde_json::from_reader(file)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "no configuration yet, writing the default");
                let config = Self::default();
                config.to_disk()?;
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }
}
