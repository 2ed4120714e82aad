use crate::api::models::{EpochTime, PoolDescriptor, UserInfo};
use serde::Deserialize;

/// Fields the registrar attaches to every response, successful or not
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseStatus {
    /// "success" or "error"
    #[serde(default)]
    pub status: String,
    /// Human readable explanation
    #[serde(default)]
    pub reason: String,
    /// When the registrar finished handling the request
    #[serde(default)]
    pub time: Option<EpochTime>,
    /// Fresh anti-CSRF token; older registrars used other field names
    #[serde(default, alias = "csrf_token", alias = "CSRF-Token")]
    x_csrf_token: Option<String>,
}

impl ResponseStatus {
    /// Assemble status fields by hand
    pub fn new(
        status: impl Into<String>,
        reason: impl Into<String>,
        time: Option<EpochTime>,
        csrf_token: Option<String>,
    ) -> Self {
        Self {
            status: status.into(),
            reason: reason.into(),
            time,
            x_csrf_token: csrf_token,
        }
    }

    /// A token to use for the next request, if one was issued
    pub fn csrf_token(&self) -> Option<&str> {
        self.x_csrf_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// A response body: the common status fields plus one payload
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Common fields
    #[serde(flatten)]
    pub status: ResponseStatus,
    /// Endpoint specific payload
    #[serde(flatten)]
    pub payload: T,
}

/// Body of `GET /user-info`
#[derive(Debug, Deserialize)]
pub struct UserInfoBody {
    /// The user
    pub user_info: UserInfo,
}

/// Body of `GET /pool`
#[derive(Debug, Deserialize)]
pub struct PoolListBody {
    /// Every pool the user owns
    pub pool_list: Vec<PoolDescriptor>,
}

/// Body of `GET /pool/{pool}`: a pool list holding the one pool
#[derive(Debug, Deserialize)]
#[serde(try_from = "PoolListBody")]
pub struct PoolGetBody {
    /// The pool asked for
    pub pool_desc: PoolDescriptor,
}

impl TryFrom<PoolListBody> for PoolGetBody {
    type Error = String;

    fn try_from(body: PoolListBody) -> Result<Self, Self::Error> {
        body.pool_list
            .into_iter()
            .next()
            .map(|pool_desc| Self { pool_desc })
            .ok_or_else(|| "empty pool_list".to_string())
    }
}

/// Body of bucket and key operations
#[derive(Debug, Deserialize)]
pub struct PoolDescBody {
    /// The pool after the operation
    pub pool_desc: PoolDescriptor,
}

/// Body of operations whose payload we do not use
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {}

/// Decoded payload, one variant per response shape
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// User info
    UserInfo(UserInfo),
    /// Pool listing
    PoolList(Vec<PoolDescriptor>),
    /// One pool
    PoolDesc(PoolDescriptor),
    /// Nothing we care about
    Acknowledged,
}

impl From<UserInfoBody> for Payload {
    fn from(body: UserInfoBody) -> Self {
        Payload::UserInfo(body.user_info)
    }
}

impl From<PoolListBody> for Payload {
    fn from(body: PoolListBody) -> Self {
        Payload::PoolList(body.pool_list)
    }
}

impl From<PoolGetBody> for Payload {
    fn from(body: PoolGetBody) -> Self {
        Payload::PoolDesc(body.pool_desc)
    }
}

impl From<PoolDescBody> for Payload {
    fn from(body: PoolDescBody) -> Self {
        Payload::PoolDesc(body.pool_desc)
    }
}

impl From<Acknowledgement> for Payload {
    fn from(_: Acknowledgement) -> Self {
        Payload::Acknowledged
    }
}

/// A successful exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Common fields
    pub status: ResponseStatus,
    /// What came back
    pub payload: Payload,
}

impl<T: Into<Payload>> From<Envelope<T>> for Reply {
    fn from(envelope: Envelope<T>) -> Self {
        Self {
            status: envelope.status,
            payload: envelope.payload.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Acknowledgement, Envelope, Payload, PoolDescBody, Reply, ResponseStatus};
    use crate::api::models::EpochTime;

    #[test]
    fn token_under_any_name() {
        for field in ["x_csrf_token", "csrf_token", "CSRF-Token"] {
            let json = format!(r#"{{"status": "success", "reason": "", "{field}": "tok"}}"#);
            let status: ResponseStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status.csrf_token(), Some("tok"));
        }
    }

    #[test]
    fn empty_token_is_no_token() {
        let status: ResponseStatus =
            serde_json::from_str(r#"{"status": "success", "x_csrf_token": ""}"#).unwrap();
        assert_eq!(status.csrf_token(), None);
    }

    #[test]
    fn pool_desc_envelope() {
        let json = r#"{
            "status": "success", "reason": "", "time": "1686755715", "x_csrf_token": "t1",
            "pool_desc": {"pool_name": "p", "buckets_directory": "/d", "owner_uid": "u", "owner_gid": "g",
                          "buckets": [], "secrets": []}
        }"#;
        let envelope: Envelope<PoolDescBody> = serde_json::from_str(json).unwrap();
        let reply = Reply::from(envelope);
        assert_eq!(reply.status.time, Some(EpochTime(1686755715)));
        assert_eq!(reply.status.csrf_token(), Some("t1"));
        match reply.payload {
            Payload::PoolDesc(desc) => assert_eq!(desc.pool_name, "p"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn acknowledgement_ignores_payload() {
        let json = r#"{"status": "success", "reason": "", "time": 0, "pool_desc": {"pool_name": "ignored"}}"#;
        let envelope: Envelope<Acknowledgement> = serde_json::from_str(json).unwrap();
        assert_eq!(Reply::from(envelope).payload, Payload::Acknowledged);
    }

    #[test]
    fn missing_payload_is_an_error() {
        let json = r#"{"status": "success", "reason": ""}"#;
        assert!(serde_json::from_str::<Envelope<PoolDescBody>>(json).is_err());
    }
}
