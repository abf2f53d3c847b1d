//! One `impl Client` block per resource family. Every method builds a
//! `/v3` path and forwards to the generic dispatcher.

use crate::client::Payload;
use serde_json::Value;

pub mod catalog;
pub mod groups;
pub mod pages;
pub mod questions;
pub mod responses;
pub mod surveys;
pub mod users;
pub mod webhooks;

/// Documents a writable field: name, type, description.
pub type FieldDoc = (&'static str, &'static str, &'static str);

/// Unwraps a `json!` object literal into a request payload.
pub(crate) fn object(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}
