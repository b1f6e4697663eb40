//! Headless chat view: a [`ChatState`] wired to a [`ChatService`].
//!
//! Front ends without a reactive runtime (the terminal client, tests) drive
//! the view through this type. The browser UI runs the same transitions
//! itself around its own signal.

use crate::service::ChatService;
use crate::state::{ChatState, SettleOutcome};

pub struct ChatSession<S> {
    service: S,
    state: ChatState,
}

impl<S: ChatService> ChatSession<S> {
    pub fn new(service: S) -> Self {
        Self { service, state: ChatState::default() }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Mount-time work: log the mount and run the liveness probe.
    pub async fn mount(&mut self) {
        self.state.record_mounted();
        let result = self.service.probe().await;
        self.state.record_probe(result);
    }

    /// Submit the current input and wait for the call to settle.
    ///
    /// Returns `None` when the submission was rejected and nothing was sent.
    pub async fn submit(&mut self, clock: impl Fn() -> String) -> Option<SettleOutcome> {
        let request = self.state.begin_submit(Some(clock()))?;
        log::debug!("sending chat request ({} bytes)", request.message.len());
        let result = self.service.chat(&request).await;
        Some(self.state.settle(result, Some(clock())))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
