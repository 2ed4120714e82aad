use crate::api::{requests::ApiRequest, response::PoolGetBody};
use reqwest::Method;

/// Fetch one pool afresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPool {
    /// Pool-ID
    pub pool_name: String,
}

impl ApiRequest for GetPool {
    type ResponseType = PoolGetBody;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/pool/{}", self.pool_name)
    }
}

#[cfg(test)]
mod test {
    use super::GetPool;
    use crate::api::{
        requests::ApiRequest,
        response::{Envelope, Payload, PoolGetBody, Reply},
    };
    use reqwest::Method;

    #[test]
    fn describe() {
        let call = GetPool {
            pool_name: "d4f0c1e2".to_string(),
        }
        .describe("/api~");
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, "/api~/pool/d4f0c1e2");
        assert_eq!(call.body, None);
    }

    #[test]
    fn first_listed_pool_is_the_answer() {
        let body = r#"{
            "status": "success", "x_csrf_token": "t1",
            "pool_list": [{
                "pool_name": "d4f0c1e2", "buckets_directory": "/home/alice/p1",
                "owner_uid": "alice", "owner_gid": "staff"
            }]
        }"#;
        let envelope: Envelope<PoolGetBody> = serde_json::from_str(body).unwrap();
        let reply = Reply::from(envelope);
        match reply.payload {
            Payload::PoolDesc(desc) => assert_eq!(desc.pool_name, "d4f0c1e2"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_a_format_error() {
        let body = r#"{"status": "success", "pool_list": []}"#;
        assert!(serde_json::from_str::<Envelope<PoolGetBody>>(body).is_err());
    }
}
