use crate::api::{requests::ApiRequest, response::PoolDescBody};
use reqwest::Method;
use serde_json::{json, Value};

/// Remove a bucket from a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBucket {
    /// Pool-ID
    pub pool_name: String,
    /// Bucket name
    pub name: String,
}

impl ApiRequest for DeleteBucket {
    type ResponseType = PoolDescBody;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/pool/{}/bucket/{}", self.pool_name, self.name)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({}))
    }
}

#[cfg(test)]
mod test {
    use super::DeleteBucket;
    use crate::api::requests::ApiRequest;
    use reqwest::Method;

    #[test]
    fn describe() {
        let call = DeleteBucket {
            pool_name: "p1".to_string(),
            name: "b1".to_string(),
        }
        .describe("");
        assert_eq!(call.method, Method::DELETE);
        assert_eq!(call.path, "/pool/p1/bucket/b1");
    }
}
