use crate::api::{requests::ApiRequest, response::PoolDescBody};
use reqwest::Method;
use serde_json::{json, Value};

/// Revoke an access key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSecret {
    /// Pool-ID
    pub pool_name: String,
    /// Access key id
    pub access_key: String,
}

impl ApiRequest for DeleteSecret {
    type ResponseType = PoolDescBody;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/pool/{}/secret/{}", self.pool_name, self.access_key)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({}))
    }
}
