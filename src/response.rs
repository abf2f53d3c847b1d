use crate::error::{ApiError, Result};
use log::warn;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A successful API answer, passed through as the provider sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    Text(String),
    /// The provider answered 204.
    NoContent,
}

impl Reply {
    pub fn json(&self) -> Option<&Value> {
        match self {
            Reply::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Reply::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, Reply::NoContent)
    }

    /// Deserializes the reply into a caller-chosen type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let value = match self {
            Reply::Json(value) => value,
            Reply::Text(text) => serde_json::from_str(&text)?,
            Reply::NoContent => Value::Null,
        };
        Ok(serde_json::from_value(value)?)
    }
}

enum Body {
    Json(Value),
    Text(String),
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Turns a raw HTTP answer into a [`Reply`] or a classified failure.
///
/// An error envelope wins over the status code. Text bodies skip the
/// envelope check entirely.
pub fn parse_response(status: StatusCode, content_type: Option<&str>, body: &str) -> Result<Reply> {
    let decoded = if is_json(content_type) {
        match serde_json::from_str(body) {
            Ok(value) => Body::Json(value),
            // 204 bodies are ignored, so a broken one is not worth failing on
            Err(_) if status == StatusCode::NO_CONTENT => Body::Text(body.to_string()),
            Err(e) => return Err(e.into()),
        }
    } else {
        Body::Text(body.to_string())
    };

    if let Body::Json(Value::Object(envelope)) = &decoded {
        if envelope.contains_key("error") {
            let error = ApiError::from_envelope(envelope);
            warn!("API error (status {}): {}", status, error);
            return Err(error.into());
        }
    }

    match status {
        StatusCode::OK | StatusCode::CREATED => Ok(match decoded {
            Body::Json(value) => Reply::Json(value),
            Body::Text(text) => Reply::Text(text),
        }),
        StatusCode::NO_CONTENT => Ok(Reply::NoContent),
        other => {
            warn!("Unexpected status {} without error envelope", other);
            Err(ApiError::Unknown {
                code: None,
                message: None,
            }
            .into())
        }
    }
}
