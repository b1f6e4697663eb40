//! Plot payloads carried by chat replies.
//!
//! The service encodes a Plotly figure (`{ data, layout, ... }`) as a JSON
//! string inside the reply. This module decodes that string and checks the
//! shape just enough for a charting front end to hand it to `Plotly.newPlot`.
//! Everything beyond `data` and `layout` is passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reasons a plot string is rejected.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("plot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plot must be a JSON-encoded string, got {0}")]
    NotAString(&'static str),

    #[error("plot must be a JSON object")]
    NotAnObject,

    #[error("plot is missing `data`")]
    MissingData,

    #[error("plot field `{field}` must be {expected}")]
    Shape { field: &'static str, expected: &'static str },
}

/// Decoded figure description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPayload {
    /// Trace list.
    pub data: Vec<Value>,
    pub layout: Map<String, Value>,
    /// Additional top-level keys such as `config` or `frames`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlotPayload {
    /// Parse the string form sent in `ChatReply::plot`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlotError`] when the text is not JSON, not an object, has
    /// no `data`, or has a `data`/`layout` of the wrong type.
    pub fn parse(raw: &str) -> Result<Self, PlotError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Validate an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`PlotPayload::parse`], minus the JSON syntax case.
    pub fn from_value(value: Value) -> Result<Self, PlotError> {
        let Value::Object(mut fields) = value else {
            return Err(PlotError::NotAnObject);
        };

        let data = match fields.remove("data") {
            Some(Value::Array(traces)) => traces,
            Some(_) => return Err(PlotError::Shape { field: "data", expected: "an array" }),
            None => return Err(PlotError::MissingData),
        };

        let layout = match fields.remove("layout") {
            Some(Value::Object(layout)) => layout,
            None | Some(Value::Null) => Map::new(),
            Some(_) => return Err(PlotError::Shape { field: "layout", expected: "an object" }),
        };

        Ok(Self { data, layout, extra: fields })
    }

    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    /// Figure title, accepting both `layout.title = "..."` and
    /// `layout.title = { text: "..." }`.
    pub fn title(&self) -> Option<&str> {
        let title = match self.layout.get("title")? {
            Value::String(title) => Some(title.as_str()),
            Value::Object(title) => title.get("text").and_then(Value::as_str),
            _ => None,
        };
        title.filter(|title| !title.is_empty())
    }

    /// `data` as a JSON array value.
    pub fn data_value(&self) -> Value {
        Value::Array(self.data.clone())
    }

    /// `layout` as a JSON object value.
    pub fn layout_value(&self) -> Value {
        Value::Object(self.layout.clone())
    }

    /// One-line description for text-only front ends.
    pub fn summary(&self) -> String {
        let count = self.trace_count();
        let noun = if count == 1 { "trace" } else { "traces" };
        match self.title() {
            Some(title) => format!("[plot: {count} {noun}, \"{title}\"]"),
            None => format!("[plot: {count} {noun}]"),
        }
    }
}

#[cfg(test)]
#[path = "plot_test.rs"]
mod tests;
