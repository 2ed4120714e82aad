use crate::api::{models::BucketPolicy, requests::ApiRequest, response::PoolDescBody};
use reqwest::Method;
use serde_json::{json, Value};

/// Add a bucket to a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBucket {
    /// Pool-ID
    pub pool_name: String,
    /// Bucket name
    pub name: String,
    /// Anonymous access policy
    pub bkt_policy: BucketPolicy,
}

impl ApiRequest for CreateBucket {
    type ResponseType = PoolDescBody;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/pool/{}/bucket", self.pool_name)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({
            "name": self.name,
            "bkt_policy": self.bkt_policy,
        }))
    }
}
