use super::*;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

// =========================================================================
// Test server
// =========================================================================

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn service_for(base_url: &str) -> HttpChatService {
    HttpChatService::new(ChatConfig::new(base_url).unwrap()).unwrap()
}

fn echo_app() -> Router {
    Router::new()
        .route("/", get(|| async { Json(json!({ "status": "up" })) }))
        .route(
            "/api/chat",
            post(|Json(req): Json<ChatRequest>| async move {
                if req.message == "plot" {
                    let figure = json!({ "data": [{ "type": "bar", "x": ["a"], "y": [3] }], "layout": {} });
                    Json(json!({ "message": "Here you go", "plot": figure.to_string() }))
                } else {
                    Json(json!({ "message": format!("echo: {}", req.message) }))
                }
            }),
        )
}

// =========================================================================
// probe
// =========================================================================

#[tokio::test]
async fn probe_reports_status() {
    let base = spawn_server(echo_app()).await;
    assert_eq!(service_for(&base).probe().await, Ok(200));
}

#[tokio::test]
async fn probe_non_2xx_is_error() {
    let app = Router::new().route("/", get(|| async { (StatusCode::NOT_FOUND, "nothing here") }));
    let base = spawn_server(app).await;
    assert_eq!(service_for(&base).probe().await, Err(ServiceError::Status { status: 404, detail: None }));
}

#[tokio::test]
async fn probe_unreachable_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = service_for(&format!("http://{addr}")).probe().await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)), "{err:?}");
    assert!(err.to_string().starts_with("Network Error: "));
}

// =========================================================================
// chat
// =========================================================================

#[tokio::test]
async fn chat_posts_message_and_decodes_reply() {
    let base = spawn_server(echo_app()).await;
    let reply = service_for(&base)
        .chat(&ChatRequest { message: "hello".into() })
        .await
        .unwrap();
    assert_eq!(reply, ChatReply { message: "echo: hello".into(), plot: None });
}

#[tokio::test]
async fn chat_passes_plot_string_through() {
    let base = spawn_server(echo_app()).await;
    let reply = service_for(&base)
        .chat(&ChatRequest { message: "plot".into() })
        .await
        .unwrap();
    let plot = crate::plot::PlotPayload::parse(reply.plot_source().unwrap().unwrap()).unwrap();
    assert_eq!(plot.trace_count(), 1);
}

#[tokio::test]
async fn chat_error_status_carries_detail() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "model offline" }))) }),
    );
    let base = spawn_server(app).await;
    let err = service_for(&base)
        .chat(&ChatRequest { message: "hi".into() })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status code 500: model offline");
}

#[tokio::test]
async fn chat_malformed_body_is_decode_error() {
    let app = Router::new().route("/api/chat", post(|| async { "plain text" }));
    let base = spawn_server(app).await;
    let err = service_for(&base)
        .chat(&ChatRequest { message: "hi".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)), "{err:?}");
}

// =========================================================================
// End to end through ChatSession
// =========================================================================

#[tokio::test]
async fn session_over_http_appends_text_and_plot() {
    let base = spawn_server(echo_app()).await;
    let mut session = crate::session::ChatSession::new(service_for(&base));
    session.mount().await;
    assert_eq!(session.state().diagnostics.lines().last().map(String::as_str), Some("API connection successful: 200"));

    session.set_input("plot");
    session.submit(|| "now".to_owned()).await.unwrap();

    let msgs = session.state().messages();
    assert_eq!(msgs.len(), 3);
    assert_eq!(msgs[1].text.as_deref(), Some("Here you go"));
    assert!(msgs[2].is_plot());
}

#[tokio::test]
async fn session_over_http_keeps_text_when_plot_is_an_object() {
    let app = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "message": "Here you go", "plot": { "data": [], "layout": {} } })) }),
    );
    let base = spawn_server(app).await;
    let mut session = crate::session::ChatSession::new(service_for(&base));

    session.set_input("plot");
    let outcome = session.submit(|| "now".to_owned()).await;
    assert!(
        matches!(
            outcome,
            Some(crate::state::SettleOutcome::Replied {
                plot: crate::state::PlotStatus::Dropped(crate::plot::PlotError::NotAString(_))
            })
        ),
        "{outcome:?}"
    );

    let texts: Vec<_> = session.state().messages().iter().map(|m| m.text.as_deref()).collect();
    assert_eq!(texts, [Some("plot"), Some("Here you go")]);
    assert!(!session.state().loading);
}
