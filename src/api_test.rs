use super::*;

// =============================================================
// ChatReply decoding
// =============================================================

#[test]
fn reply_without_plot_field() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
    assert_eq!(reply.message, "hello");
    assert_eq!(reply.plot, None);
    assert!(reply.plot_source().is_none());
}

#[test]
fn reply_with_null_plot() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"hi","plot":null}"#).unwrap();
    assert!(reply.plot_source().is_none());
}

#[test]
fn reply_with_blank_plot_is_treated_as_absent() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"hi","plot":"  "}"#).unwrap();
    assert_eq!(reply.plot, Some(serde_json::json!("  ")));
    assert!(reply.plot_source().is_none());
}

#[test]
fn reply_with_plot_string() {
    let raw = serde_json::json!({
        "message": "see chart",
        "plot": "{\"data\":[],\"layout\":{}}"
    });
    let reply: ChatReply = serde_json::from_value(raw).unwrap();
    assert_eq!(reply.plot_source().unwrap().unwrap(), "{\"data\":[],\"layout\":{}}");
}

#[test]
fn reply_with_plot_object_still_decodes() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"message":"see chart","plot":{"data":[],"layout":{}}}"#).unwrap();
    assert_eq!(reply.message, "see chart");
    assert!(matches!(reply.plot_source(), Some(Err(PlotError::NotAString("an object")))));
}

#[test]
fn reply_with_numeric_plot_is_not_a_string() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"hi","plot":7}"#).unwrap();
    let err = reply.plot_source().unwrap().unwrap_err();
    assert_eq!(err.to_string(), "plot must be a JSON-encoded string, got a number");
}

#[test]
fn reply_missing_message_is_rejected() {
    assert!(serde_json::from_str::<ChatReply>(r#"{"plot":"{}"}"#).is_err());
}

// =============================================================
// ChatRequest encoding
// =============================================================

#[test]
fn request_serializes_message_field() {
    let req = ChatRequest { message: "plot x vs y".into() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "message": "plot x vs y" }));
}
