//! Errors surfaced by calls to the chat service.
//!
//! The `Display` text of [`ServiceError`] is user facing: it is embedded
//! verbatim in the error bubble and in the diagnostic log.

/// Failure of a probe or chat call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("Request failed with status code {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Network Error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the contract.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// No network backend is available in this build.
    #[error("Network unavailable")]
    Unavailable,
}

impl ServiceError {
    /// Build a status error, pulling a `detail` or `message` string out of a
    /// JSON error body when the service sent one.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: error_detail(body) }
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
