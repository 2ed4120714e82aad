use super::{
    error::ApiError,
    requests::{AnyRequest, ApiCall, ApiRequest},
    response::{Envelope, Reply, ResponseStatus},
};
use reqwest::{
    cookie::Jar,
    header::{HeaderMap, HeaderValue},
    Client as ReqwestClient, RequestBuilder, Url,
};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Header carrying the anti-CSRF token on every request
pub const CSRF_HEADER: &str = "X-CSRF-Token";
/// Header naming the user when talking to the service without a proxy
pub const REMOTE_USER_HEADER: &str = "X-REMOTE-USER";
/// Cookie set by an Apache OpenID Connect front end
pub const OIDC_SESSION_COOKIE: &str = "mod_auth_openidc_session";

/// How the console authenticates to whatever sits in front of the registrar
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Credentials {
    /// Nothing, the front end authenticates by other means
    #[default]
    None,
    /// HTTP basic authentication
    Basic {
        /// User name
        user: String,
        /// Password
        password: String,
    },
    /// Direct access to the service on localhost, naming the user in a header
    RemoteUser {
        /// User name
        user: String,
    },
    /// An existing OpenID Connect session
    OidcSession {
        /// Session cookie value
        cookie: String,
    },
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print passwords or session cookies
        match self {
            Credentials::None => f.write_str("None"),
            Credentials::Basic { user, .. } => f.debug_struct("Basic").field("user", user).finish(),
            Credentials::RemoteUser { user } => {
                f.debug_struct("RemoteUser").field("user", user).finish()
            }
            Credentials::OidcSession { .. } => f.write_str("OidcSession"),
        }
    }
}

#[derive(Debug, Clone)]
/// Client for interacting with the registrar
pub struct Client {
    /// Origin of the registrar
    pub endpoint: Url,
    /// Prefix of every path, without a trailing slash
    pub base_path: String,
    /// How we authenticate
    credentials: Credentials,
    /// The reqwest client
    reqwest_client: ReqwestClient,
}

/// Move any path on the endpoint in front of the base path, so that joining
/// an absolute API path keeps it
fn split_endpoint(mut endpoint: Url, base_path: &str) -> (Url, String) {
    let prefix = endpoint.path().trim_end_matches('/').to_string();
    endpoint.set_path("/");
    let base_path = base_path.trim_end_matches('/');
    let base_path = match (prefix.is_empty(), base_path.is_empty()) {
        (true, _) => base_path.to_string(),
        (false, true) => prefix,
        (false, false) => format!("{prefix}/{}", base_path.trim_start_matches('/')),
    };
    (endpoint, base_path)
}

impl Client {
    /// Create a new Client at a remote endpoint
    /// # Arguments
    /// * `endpoint` - Origin of the registrar
    /// * `base_path` - Prefix of every path, e.g. when running behind a proxy
    pub fn new(endpoint: &str, base_path: &str) -> Result<Self, ApiError> {
        Self::with_credentials(endpoint, base_path, Credentials::None, None)
    }

    /// Create a new Client with credentials and an optional request timeout
    pub fn with_credentials(
        endpoint: &str,
        base_path: &str,
        credentials: Credentials,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let (endpoint, base_path) = split_endpoint(Url::parse(endpoint)?, base_path);

        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        // The registrar pairs the header token with a cookie, so keep a jar
        let jar = Jar::default();
        if let Credentials::OidcSession { cookie } = &credentials {
            jar.add_cookie_str(&format!("{OIDC_SESSION_COOKIE}={cookie}"), &endpoint);
        }

        let mut builder = ReqwestClient::builder()
            .default_headers(default_headers)
            .cookie_provider(Arc::new(jar));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().map_err(ApiError::http)?;

        Ok(Self {
            endpoint,
            base_path,
            credentials,
            reqwest_client,
        })
    }

    /// Build the reqwest request for a described call
    fn build_request(&self, call: &ApiCall, csrf_token: Option<&str>) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint.join(&call.path)?;
        let mut request_builder = self.reqwest_client.request(call.method.clone(), url);

        if let Some(body) = &call.body {
            request_builder = request_builder.json(body);
        }
        if let Some(token) = csrf_token {
            request_builder = request_builder.header(CSRF_HEADER, token);
        }

        request_builder = match &self.credentials {
            Credentials::Basic { user, password } => {
                request_builder.basic_auth(user, Some(password))
            }
            Credentials::RemoteUser { user } => request_builder.header(REMOTE_USER_HEADER, user),
            Credentials::None | Credentials::OidcSession { .. } => request_builder,
        };

        Ok(request_builder)
    }

    /// Call a method that implements ApiRequest
    pub async fn call<T: ApiRequest>(
        &self,
        request: &T,
        csrf_token: Option<&str>,
    ) -> Result<Reply, ApiError> {
        let call = request.describe(&self.base_path);
        debug!(method = %call.method, path = %call.path, "sending request");

        // Send the request and obtain the response
        let response = self.build_request(&call, csrf_token)?.send().await?;
        let code = response.status();
        let bytes = response.bytes().await?;

        // If the call succeeded
        if code.is_success() {
            debug!(method = %call.method, path = %call.path, status = code.as_u16(), "request done");
            match serde_json::from_slice::<Envelope<T::ResponseType>>(&bytes) {
                Ok(envelope) => Ok(Reply::from(envelope)),
                Err(err) => {
                    warn!(method = %call.method, path = %call.path, error = %err, "unreadable reply");
                    // The status fields may still hold a fresh token
                    let status = serde_json::from_slice::<ResponseStatus>(&bytes).ok();
                    Err(ApiError::format_with_status(err, status))
                }
            }
        } else {
            warn!(method = %call.method, path = %call.path, status = code.as_u16(), "request refused");
            // Try to read the status fields out of the error body
            match serde_json::from_slice::<ResponseStatus>(&bytes) {
                Ok(status) => Err(ApiError::server_status(code, status)),
                Err(_) => Err(ApiError::http_response(code)),
            }
        }
    }

    /// Call whichever request this is
    pub async fn call_any(
        &self,
        request: &AnyRequest,
        csrf_token: Option<&str>,
    ) -> Result<Reply, ApiError> {
        match request {
            AnyRequest::GetUserInfo(r) => self.call(r, csrf_token).await,
            AnyRequest::ListPools(r) => self.call(r, csrf_token).await,
            AnyRequest::GetPool(r) => self.call(r, csrf_token).await,
            AnyRequest::CreatePool(r) => self.call(r, csrf_token).await,
            AnyRequest::DeletePool(r) => self.call(r, csrf_token).await,
            AnyRequest::CreateBucket(r) => self.call(r, csrf_token).await,
            AnyRequest::DeleteBucket(r) => self.call(r, csrf_token).await,
            AnyRequest::CreateSecret(r) => self.call(r, csrf_token).await,
            AnyRequest::DeleteSecret(r) => self.call(r, csrf_token).await,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Client, Credentials, CSRF_HEADER, REMOTE_USER_HEADER};
    use crate::api::requests::{ApiRequest, DeletePool, ListPools};
    use reqwest::Method;

    #[test]
    fn trailing_slash_is_dropped_from_base_path() {
        let client = Client::new("http://127.0.0.1:8003", "/api~/").unwrap();
        assert_eq!(client.base_path, "/api~");
    }

    #[test]
    fn token_goes_in_the_header() {
        let client = Client::with_credentials(
            "http://127.0.0.1:8003",
            "",
            Credentials::RemoteUser {
                user: "alice".to_string(),
            },
            None,
        )
        .unwrap();
        let call = DeletePool {
            pool_name: "p1".to_string(),
        }
        .describe(&client.base_path);
        let request = client
            .build_request(&call, Some("tok"))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "http://127.0.0.1:8003/pool/p1");
        assert_eq!(request.headers()[CSRF_HEADER], "tok");
        assert_eq!(request.headers()[REMOTE_USER_HEADER], "alice");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn no_token_no_header() {
        let client = Client::new("http://127.0.0.1:8003", "").unwrap();
        let call = ListPools.describe(&client.base_path);
        let request = client.build_request(&call, None).unwrap().build().unwrap();
        assert!(request.headers().get(CSRF_HEADER).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn endpoint_path_is_kept() {
        let client = Client::new("https://lens3.example.org/lens3/", "/api~").unwrap();
        assert_eq!(client.endpoint.as_str(), "https://lens3.example.org/");
        assert_eq!(client.base_path, "/lens3/api~");
        let call = ListPools.describe(&client.base_path);
        let request = client.build_request(&call, None).unwrap().build().unwrap();
        assert_eq!(request.url().as_str(), "https://lens3.example.org/lens3/api~/pool");

        let client = Client::new("https://lens3.example.org/lens3", "").unwrap();
        assert_eq!(client.base_path, "/lens3");
        let client = Client::new("https://lens3.example.org", "/api~/").unwrap();
        assert_eq!(client.base_path, "/api~");
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let basic = Credentials::Basic {
            user: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{basic:?}").contains("hunter2"));
        let oidc = Credentials::OidcSession {
            cookie: "c00k1e".to_string(),
        };
        assert!(!format!("{oidc:?}").contains("c00k1e"));
    }
}
