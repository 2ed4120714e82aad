use crate::api::response::ResponseStatus;
use reqwest::StatusCode;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use url::ParseError;

/// Errors that can occur in the API Client
#[derive(Debug)]
#[non_exhaustive]
pub struct ApiError {
    kind: ApiErrorKind,
}

impl ApiError {
    /// The request never completed
    pub fn http(err: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::HttpClient(err),
        }
    }

    /// The registrar refused the request and told us why
    pub fn server_status(code: StatusCode, status: ResponseStatus) -> Self {
        Self {
            kind: ApiErrorKind::ServerStatus(code, status),
        }
    }

    /// The registrar refused the request without a readable reason
    pub fn http_response(code: StatusCode) -> Self {
        Self {
            kind: ApiErrorKind::HttpResponse(code),
        }
    }

    /// Response format was invalid
    pub fn format(err: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::ResponseFormat(err, None),
        }
    }

    /// A 2xx body whose payload could not be read, keeping whatever status
    /// fields could be
    pub fn format_with_status(err: serde_json::Error, status: Option<ResponseStatus>) -> Self {
        Self {
            kind: ApiErrorKind::ResponseFormat(err, status),
        }
    }

    /// A local assumption about the action or the registrar does not hold
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Precondition(msg.into()),
        }
    }

    /// The same action is already queued or in flight
    pub fn busy(action: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Busy(action.into()),
        }
    }

    /// The console task is gone
    pub fn closed() -> Self {
        Self {
            kind: ApiErrorKind::Closed,
        }
    }

    /// Endpoint could not be parsed
    pub fn url(err: ParseError) -> Self {
        Self {
            kind: ApiErrorKind::Url(err),
        }
    }

    /// Status, reason and time of a refusal, if the registrar sent any
    pub fn response_status(&self) -> Option<&ResponseStatus> {
        match &self.kind {
            ApiErrorKind::ServerStatus(_, status) => Some(status),
            _ => None,
        }
    }

    /// Token carried by the response, even when the request failed
    pub fn csrf_token(&self) -> Option<&str> {
        match &self.kind {
            ApiErrorKind::ServerStatus(_, status)
            | ApiErrorKind::ResponseFormat(_, Some(status)) => status.csrf_token(),
            _ => None,
        }
    }

    /// HTTP status of a refused request
    pub fn status_code(&self) -> Option<StatusCode> {
        match &self.kind {
            ApiErrorKind::ServerStatus(code, _) | ApiErrorKind::HttpResponse(code) => Some(*code),
            ApiErrorKind::HttpClient(err) => err.status(),
            _ => None,
        }
    }

    /// Whether this is a local precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Precondition(_))
    }

    /// Whether this was refused as a double submission
    pub fn is_busy(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Busy(_))
    }

    /// Whether the request failed before a response arrived
    pub fn is_network(&self) -> bool {
        matches!(self.kind, ApiErrorKind::HttpClient(_))
    }

    /// Whether a response arrived but could not be read
    pub fn is_format(&self) -> bool {
        matches!(self.kind, ApiErrorKind::ResponseFormat(..))
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = match &self.kind {
            ApiErrorKind::HttpClient(_) => "HTTP Client Error".into(),
            ApiErrorKind::ServerStatus(code, status) => {
                format!("{} ({}): {}", status.status, code.as_u16(), status.reason)
            }
            ApiErrorKind::HttpResponse(code) => format!("HTTP Response Error: {code}"),
            ApiErrorKind::ResponseFormat(..) => "Response Format Error".into(),
            ApiErrorKind::Precondition(msg) => format!("Precondition Failed: {msg}"),
            ApiErrorKind::Busy(action) => format!("Already in progress: {action}"),
            ApiErrorKind::Closed => "Console is no longer running".into(),
            ApiErrorKind::Url(_) => "Invalid Endpoint".into(),
        };

        write!(f, "{}", prefix)?;

        let mut next_err = self.source();
        while let Some(err) = next_err {
            write!(f, ": {err}")?;
            next_err = err.source();
        }

        Ok(())
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ApiErrorKind::HttpClient(err) => Some(err),
            ApiErrorKind::ResponseFormat(err, _) => Some(err),
            ApiErrorKind::Url(err) => Some(err),
            _ => None,
        }
    }
}

/// The type of the Client Error
#[derive(Debug)]
enum ApiErrorKind {
    /// Network level failure, including timeouts
    HttpClient(reqwest::Error),
    /// Non-2xx with a structured body
    ServerStatus(StatusCode, ResponseStatus),
    /// Non-2xx without a structured body
    HttpResponse(StatusCode),
    /// Response format was invalid, with the status fields if they parsed
    ResponseFormat(serde_json::Error, Option<ResponseStatus>),
    /// Local assertion
    Precondition(String),
    /// Double submission
    Busy(String),
    Closed,
    Url(ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::http(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::format(value)
    }
}

impl From<ParseError> for ApiError {
    fn from(value: ParseError) -> Self {
        Self::url(value)
    }
}
