use crate::api::response::Payload;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

/// Requests on pools and their buckets and keys
pub mod pools;
/// Request for the current user
pub mod user_info;

pub use pools::{
    buckets::{CreateBucket, DeleteBucket},
    secrets::{CreateSecret, DeleteSecret},
    CreatePool, DeletePool, GetPool, ListPools,
};
pub use user_info::GetUserInfo;

/// Description of one HTTP exchange, before anything is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// HTTP method
    pub method: Method,
    /// Path including the base path
    pub path: String,
    /// JSON body, if the method carries one
    pub body: Option<Value>,
}

/// Defintion of an API request
pub trait ApiRequest: Debug {
    /// Payload the registrar answers with
    type ResponseType: DeserializeOwned + Into<Payload>;

    /// HTTP method
    fn method(&self) -> Method;
    /// Path relative to the base path
    fn path(&self) -> String;
    /// JSON body
    fn body(&self) -> Option<Value> {
        None
    }

    /// Describe the exchange under a base path
    fn describe(&self, base_path: &str) -> ApiCall {
        ApiCall {
            method: self.method(),
            path: format!("{}{}", base_path.trim_end_matches('/'), self.path()),
            body: self.body(),
        }
    }
}

/// Any request the console can issue
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRequest {
    /// `GET /user-info`
    GetUserInfo(GetUserInfo),
    /// `GET /pool`
    ListPools(ListPools),
    /// `GET /pool/{pool}`
    GetPool(GetPool),
    /// `POST /pool`
    CreatePool(CreatePool),
    /// `DELETE /pool/{pool}`
    DeletePool(DeletePool),
    /// `PUT /pool/{pool}/bucket`
    CreateBucket(CreateBucket),
    /// `DELETE /pool/{pool}/bucket/{bucket}`
    DeleteBucket(DeleteBucket),
    /// `POST /pool/{pool}/secret`
    CreateSecret(CreateSecret),
    /// `DELETE /pool/{pool}/secret/{key}`
    DeleteSecret(DeleteSecret),
}

impl AnyRequest {
    /// Describe the exchange under a base path
    pub fn describe(&self, base_path: &str) -> ApiCall {
        match self {
            AnyRequest::GetUserInfo(r) => r.describe(base_path),
            AnyRequest::ListPools(r) => r.describe(base_path),
            AnyRequest::GetPool(r) => r.describe(base_path),
            AnyRequest::CreatePool(r) => r.describe(base_path),
            AnyRequest::DeletePool(r) => r.describe(base_path),
            AnyRequest::CreateBucket(r) => r.describe(base_path),
            AnyRequest::DeleteBucket(r) => r.describe(base_path),
            AnyRequest::CreateSecret(r) => r.describe(base_path),
            AnyRequest::DeleteSecret(r) => r.describe(base_path),
        }
    }
}
