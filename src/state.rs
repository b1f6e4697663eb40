//! Chat view state and its transitions.
//!
//! DESIGN
//! ======
//! `ChatState` is a plain value so it can sit inside a Leptos `RwSignal` or be
//! owned by the headless [`crate::session::ChatSession`]. A submission is two
//! transitions with the network call in between:
//!
//! 1. [`ChatState::begin_submit`] validates input, appends the user message,
//!    raises `loading`, and hands back the request to send.
//! 2. [`ChatState::settle`] appends the reply (and plot, if it decodes) or an
//!    error bubble, then lowers `loading`.
//!
//! Neither transition can fail; every service error becomes a message.

use crate::api::{ChatReply, ChatRequest};
use crate::error::ServiceError;
use crate::message::Message;
use crate::plot::{PlotError, PlotPayload};

// =============================================================================
// DIAGNOSTIC LOG
// =============================================================================

/// Free-form diagnostic lines shown in the debug panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    lines: Vec<String>,
}

impl DiagnosticLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-joined log text.
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }
}

// =============================================================================
// SETTLE OUTCOME
// =============================================================================

/// What happened to the plot half of a reply.
#[derive(Debug)]
pub enum PlotStatus {
    /// The reply carried no plot.
    Absent,
    /// A plot message was appended.
    Attached,
    /// The plot failed to decode and was dropped.
    Dropped(PlotError),
}

/// Result of settling one chat call.
#[derive(Debug)]
pub enum SettleOutcome {
    Replied { plot: PlotStatus },
    Failed,
}

// =============================================================================
// CHAT STATE
// =============================================================================

/// State owned by one chat view for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Current contents of the input box.
    pub input: String,
    pub loading: bool,
    pub diagnostics: DiagnosticLog,
    messages: Vec<Message>,
}

impl ChatState {
    /// Transcript in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Note that the view has mounted.
    pub fn record_mounted(&mut self) {
        self.diagnostics.push("App component mounted");
    }

    /// Record the outcome of the liveness probe. Never touches the transcript.
    pub fn record_probe(&mut self, result: Result<u16, ServiceError>) {
        match result {
            Ok(status) => self.diagnostics.push(format!("API connection successful: {status}")),
            Err(err) => {
                log::warn!("liveness probe failed: {err}");
                self.diagnostics.push(format!("API connection failed: {err}"));
            }
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` without side effects when the input is blank or a call
    /// is already in flight. Otherwise the input text is moved into a user
    /// message and returned as the request body.
    pub fn begin_submit(&mut self, timestamp: Option<String>) -> Option<ChatRequest> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone(), timestamp));
        self.loading = true;
        Some(ChatRequest { message: text })
    }

    /// Finish a submission with the service's answer.
    pub fn settle(&mut self, result: Result<ChatReply, ServiceError>, timestamp: Option<String>) -> SettleOutcome {
        self.loading = false;

        match result {
            Ok(reply) => {
                let parsed = reply.plot_source().map(|source| source.and_then(PlotPayload::parse));
                self.messages.push(Message::bot_text(reply.message, timestamp.clone()));

                let plot = match parsed {
                    None => PlotStatus::Absent,
                    Some(Ok(payload)) => {
                        self.messages.push(Message::bot_plot(payload, timestamp));
                        PlotStatus::Attached
                    }
                    Some(Err(err)) => {
                        log::warn!("dropping plot from chat reply: {err}");
                        PlotStatus::Dropped(err)
                    }
                };
                SettleOutcome::Replied { plot }
            }
            Err(err) => {
                log::warn!("chat call failed: {err}");
                self.messages
                    .push(Message::bot_text(format!("An error occurred: {err}. Please try again."), timestamp));
                SettleOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
