use crate::api::{
    models::{EpochTime, KeyPolicy},
    requests::ApiRequest,
    response::PoolDescBody,
};
use reqwest::Method;
use serde_json::{json, Value};

/// Issue a new access key on a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSecret {
    /// Pool-ID
    pub pool_name: String,
    /// Scope of the new key
    pub key_policy: KeyPolicy,
    /// When the key stops working
    pub expiration_time: EpochTime,
}

impl ApiRequest for CreateSecret {
    type ResponseType = PoolDescBody;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/pool/{}/secret", self.pool_name)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({
            "key_policy": self.key_policy,
            "expiration_time": self.expiration_time,
        }))
    }
}
