use serde_json::Value;
use thiserror::Error;

/// A failure reported by the SurveyMonkey API through its error envelope,
/// or an unclassified non-success response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("authorization error: {0}")]
    Authorization(String),
    #[error("permission error: {0}")]
    Permission(String),
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error("resource conflict: {0}")]
    ResourceConflict(String),
    #[error("request entity too large: {0}")]
    RequestEntityTooLarge(String),
    #[error("rate limit reached: {0}")]
    RateLimitReached(String),
    #[error("internal server error: {0}")]
    InternalServer(String),
    #[error("user soft deleted: {0}")]
    UserSoftDeleted(String),
    #[error("user deleted: {0}")]
    UserDeleted(String),
    #[error("unknown error: {}", .message.as_deref().unwrap_or("no message"))]
    Unknown {
        code: Option<String>,
        message: Option<String>,
    },
}

impl ApiError {
    /// Maps a provider error code to its error kind.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "1000" | "1001" | "1002" | "1003" | "1004" => ApiError::BadRequest(message),
            "1010" | "1011" | "1012" | "1013" => ApiError::Authorization(message),
            "1014" | "1015" | "1016" | "1017" | "1018" => ApiError::Permission(message),
            "1020" => ApiError::ResourceNotFound(message),
            "1025" | "1026" => ApiError::ResourceConflict(message),
            "1030" => ApiError::RequestEntityTooLarge(message),
            "1040" => ApiError::RateLimitReached(message),
            "1050" | "1051" => ApiError::InternalServer(message),
            "1052" => ApiError::UserSoftDeleted(message),
            "1053" => ApiError::UserDeleted(message),
            other => ApiError::Unknown {
                code: Some(other.to_string()),
                message: Some(message),
            },
        }
    }

    /// Classifies an error envelope.
    ///
    /// The code is read from `error`, either as a string, a number, or the
    /// `id` of a nested error object. The message is read from the top-level
    /// `message`, falling back to the nested object's `message`.
    pub fn from_envelope(envelope: &serde_json::Map<String, Value>) -> Self {
        let error = envelope.get("error");
        let nested = error.and_then(Value::as_object);

        let code = match nested.and_then(|e| e.get("id")).or(error) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let message = envelope
            .get("message")
            .or_else(|| nested.and_then(|e| e.get("message")))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match code {
            Some(code) => ApiError::from_code(&code, message),
            None => ApiError::Unknown {
                code: None,
                message: Some(message),
            },
        }
    }

    /// The provider's message text, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(m)
            | ApiError::Authorization(m)
            | ApiError::Permission(m)
            | ApiError::ResourceNotFound(m)
            | ApiError::ResourceConflict(m)
            | ApiError::RequestEntityTooLarge(m)
            | ApiError::RateLimitReached(m)
            | ApiError::InternalServer(m)
            | ApiError::UserSoftDeleted(m)
            | ApiError::UserDeleted(m) => Some(m),
            ApiError::Unknown { message, .. } => message.as_deref(),
        }
    }
}

/// Every failure this crate can surface.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Transport failures are passed through untouched.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no access token set, complete the authorization flow first")]
    MissingAccessToken,
    #[error("token response has no `access_token` field")]
    MissingTokenField,
    #[error("token refresh is not supported, re-run the authorization flow")]
    RefreshUnsupported,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
