use crate::api::{requests::ApiRequest, response::Acknowledgement};
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

/// Make a new pool on a directory owned by a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePool {
    /// Directory holding the buckets, absolute on the server host
    pub buckets_directory: String,
    /// Unix group that owns the pool
    pub owner_gid: String,
}

impl ApiRequest for CreatePool {
    type ResponseType = Acknowledgement;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/pool".to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(json!({
            "buckets_directory": self.buckets_directory,
            "owner_gid": self.owner_gid,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::CreatePool;
    use crate::api::requests::ApiRequest;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn describe() {
        let call = CreatePool {
            buckets_directory: "/home/alice/pool 1".to_string(),
            owner_gid: "staff".to_string(),
        }
        .describe("");
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, "/pool");
        assert_eq!(
            call.body,
            Some(json!({"buckets_directory": "/home/alice/pool 1", "owner_gid": "staff"}))
        );
    }
}
