use crate::api::{requests::ApiRequest, response::PoolListBody};
use reqwest::Method;

/// List every pool of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPools;

impl ApiRequest for ListPools {
    type ResponseType = PoolListBody;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/pool".to_string()
    }
}
