//! Wire types for the chat service HTTP contract.
//!
//! `POST /api/chat` takes a [`ChatRequest`] and answers with a [`ChatReply`].
//! The reply's `plot` is itself a JSON document encoded as a string; it is
//! decoded separately by [`crate::plot::PlotPayload::parse`]. The field is
//! read as a loose JSON value so a badly typed plot never costs the reply
//! its text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plot::PlotError;

/// Path of the chat endpoint relative to the service root.
pub const CHAT_PATH: &str = "/api/chat";

/// Body of a chat submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by a successful chat call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<Value>,
}

impl ChatReply {
    /// Raw plot document.
    ///
    /// `None` when the field is missing, null, or a blank string. Any other
    /// non-string value is a [`PlotError::NotAString`].
    pub fn plot_source(&self) -> Option<Result<&str, PlotError>> {
        match self.plot.as_ref()? {
            Value::Null => None,
            Value::String(raw) if raw.trim().is_empty() => None,
            Value::String(raw) => Some(Ok(raw)),
            other => Some(Err(PlotError::NotAString(json_kind(other)))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
