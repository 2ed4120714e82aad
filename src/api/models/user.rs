use crate::api::error::ApiError;
use serde::{Deserialize, Serialize};

/// Registrar API version this client speaks
pub const API_VERSION: &str = "v1.2";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Who the registrar thinks we are
pub struct UserInfo {
    /// Unix user name
    pub uid: String,
    /// Unix groups the user may assign pools to
    #[serde(default)]
    pub groups: Vec<String>,
    /// API version of the registrar
    pub api_version: String,
    /// Release of the service
    #[serde(default)]
    pub lens3_version: String,
    /// Endpoint for S3 clients
    #[serde(default)]
    pub s3_url: String,
    /// Banner text the operator wants shown
    #[serde(default)]
    pub footer_banner: String,
}

impl UserInfo {
    /// Make sure the registrar speaks our API version
    pub fn check_api_version(&self) -> Result<(), ApiError> {
        if self.api_version == API_VERSION {
            Ok(())
        } else {
            Err(ApiError::precondition(format!(
                "registrar api mismatch: expected {API_VERSION}, got {}",
                self.api_version
            )))
        }
    }
}
