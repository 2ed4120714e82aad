use crate::api::{requests::ApiRequest, response::UserInfoBody};
use reqwest::Method;

/// Fetch the user, and with it the first CSRF token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserInfo;

impl ApiRequest for GetUserInfo {
    type ResponseType = UserInfoBody;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/user-info".to_string()
    }
}
