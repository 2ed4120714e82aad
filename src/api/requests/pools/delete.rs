use crate::api::{requests::ApiRequest, response::Acknowledgement};
use reqwest::Method;
use serde_json::{json, Value};

/// Remove a pool with everything in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePool {
    /// Pool-ID
    pub pool_name: String,
}

impl ApiRequest for DeletePool {
    type ResponseType = Acknowledgement;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/pool/{}", self.pool_name)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({}))
    }
}

#[cfg(test)]
mod test {
    use super::DeletePool;
    use crate::api::requests::ApiRequest;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn describe() {
        let call = DeletePool {
            pool_name: "d4f0c1e2".to_string(),
        }
        .describe("/api~");
        assert_eq!(call.method, Method::DELETE);
        assert_eq!(call.path, "/api~/pool/d4f0c1e2");
        assert_eq!(call.body, Some(json!({})));
    }
}
