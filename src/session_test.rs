use super::*;
use crate::api::{ChatReply, ChatRequest};
use crate::error::ServiceError;
use crate::message::Sender;
use crate::state::PlotStatus;
use std::cell::RefCell;
use std::collections::VecDeque;

// =========================================================================
// MockService
// =========================================================================

struct MockService {
    probe: Result<u16, ServiceError>,
    replies: RefCell<VecDeque<Result<ChatReply, ServiceError>>>,
    requests: RefCell<Vec<ChatRequest>>,
}

impl MockService {
    fn new(replies: Vec<Result<ChatReply, ServiceError>>) -> Self {
        Self { probe: Ok(200), replies: RefCell::new(replies.into()), requests: RefCell::new(Vec::new()) }
    }

    fn unreachable() -> Self {
        Self { probe: Err(ServiceError::Transport("connection refused".into())), ..Self::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl ChatService for MockService {
    async fn probe(&self) -> Result<u16, ServiceError> {
        self.probe.clone()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ChatReply { message: "done".into(), plot: None }))
    }
}

fn clock() -> String {
    "09:30:00".to_owned()
}

fn text_reply(message: &str) -> Result<ChatReply, ServiceError> {
    Ok(ChatReply { message: message.into(), plot: None })
}

// =========================================================================
// mount
// =========================================================================

#[tokio::test]
async fn mount_logs_successful_probe() {
    let mut session = ChatSession::new(MockService::new(Vec::new()));
    session.mount().await;

    let log = session.state().diagnostics.lines();
    assert_eq!(log, ["App component mounted", "API connection successful: 200"]);
    assert!(session.state().messages().is_empty());
}

#[tokio::test]
async fn mount_failure_is_not_fatal() {
    let mut session = ChatSession::new(MockService::unreachable());
    session.mount().await;
    assert!(session.state().diagnostics.as_text().contains("API connection failed: Network Error"));

    session.set_input("still works?");
    let outcome = session.submit(clock).await;
    assert!(matches!(outcome, Some(SettleOutcome::Replied { .. })));
    assert_eq!(session.state().messages().len(), 2);
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn whitespace_submit_never_calls_service() {
    let mut session = ChatSession::new(MockService::new(Vec::new()));
    session.set_input("   ");

    assert!(session.submit(clock).await.is_none());
    assert_eq!(session.service().calls(), 0);
    assert!(session.state().messages().is_empty());
    assert!(!session.state().loading);
}

#[tokio::test]
async fn submit_sends_input_and_appends_reply() {
    let mut session = ChatSession::new(MockService::new(vec![text_reply("Variables: a, b, c")]));
    session.set_input("what variables are there?");

    let outcome = session.submit(clock).await;
    assert!(matches!(outcome, Some(SettleOutcome::Replied { plot: PlotStatus::Absent })));
    assert_eq!(
        session.service().requests.borrow().as_slice(),
        [ChatRequest { message: "what variables are there?".into() }]
    );

    let state = session.state();
    assert!(!state.loading);
    assert!(state.input.is_empty());
    let senders: Vec<Sender> = state.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, [Sender::User, Sender::Bot]);
    assert_eq!(state.messages()[1].text.as_deref(), Some("Variables: a, b, c"));
    assert_eq!(state.messages()[1].timestamp.as_deref(), Some("09:30:00"));
}

#[tokio::test]
async fn submit_with_plot_appends_plot_message() {
    let plot = r#"{"data":[{"type":"scatter","x":[1],"y":[2]}],"layout":{}}"#;
    let reply = Ok(ChatReply { message: "Plotted a vs b".into(), plot: Some(plot.into()) });
    let mut session = ChatSession::new(MockService::new(vec![reply]));
    session.set_input("plot a vs b");

    session.submit(clock).await.unwrap();
    let msgs = session.state().messages();
    assert_eq!(msgs.len(), 3);
    assert_eq!(msgs[1].text.as_deref(), Some("Plotted a vs b"));
    assert!(msgs[2].is_plot());
}

#[tokio::test]
async fn submit_failure_becomes_error_bubble() {
    let err = Err(ServiceError::Status { status: 502, detail: None });
    let mut session = ChatSession::new(MockService::new(vec![err]));
    session.set_input("hello");

    let outcome = session.submit(clock).await;
    assert!(matches!(outcome, Some(SettleOutcome::Failed)));

    let state = session.state();
    assert!(!state.loading);
    assert_eq!(state.messages().len(), 2);
    assert!(state.messages()[1].text_or_empty().contains("Request failed with status code 502"));
}

#[tokio::test]
async fn consecutive_submissions_keep_arrival_order() {
    let mut session = ChatSession::new(MockService::new(vec![text_reply("one"), text_reply("two")]));
    for input in ["first", "second"] {
        session.set_input(input);
        session.submit(clock).await.unwrap();
    }

    let texts: Vec<&str> = session.state().messages().iter().map(|m| m.text_or_empty()).collect();
    assert_eq!(texts, ["first", "one", "second", "two"]);
    assert_eq!(session.service().calls(), 2);
}
