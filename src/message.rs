//! Chat messages as rendered in the message list.

use serde::{Deserialize, Serialize};

use crate::plot::PlotPayload;

/// Author of a message; drives bubble alignment and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single entry in the chat transcript.
///
/// Carries text, a plot, or (in principle) both. Messages are never edited
/// after they are appended to [`crate::state::ChatState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotPayload>,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>, timestamp: Option<String>) -> Self {
        Self { text: Some(text.into()), plot: None, sender: Sender::User, timestamp }
    }

    pub fn bot_text(text: impl Into<String>, timestamp: Option<String>) -> Self {
        Self { text: Some(text.into()), plot: None, sender: Sender::Bot, timestamp }
    }

    pub fn bot_plot(plot: PlotPayload, timestamp: Option<String>) -> Self {
        Self { text: None, plot: Some(plot), sender: Sender::Bot, timestamp }
    }

    pub fn is_plot(&self) -> bool {
        self.plot.is_some()
    }

    /// Text to show for this message; empty for plot-only messages.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
