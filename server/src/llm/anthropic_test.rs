use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "{\"answer\":\"IPv6 uses 128-bit addresses.\"}" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert_eq!(resp.text(), "{\"answer\":\"IPv6 uses 128-bit addresses.\"}");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_unknown_content_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "hi" },
        { "type": "some_future_type", "data": {} }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { .. }));
}

#[test]
fn parse_thinking_blocks_are_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is my answer" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Here is my answer"));
}

#[test]
fn parse_missing_stop_reason_defaults_to_end_turn() {
    let json = serde_json::json!({
        "content": [{ "type": "text", "text": "ok" }],
        "model": "claude",
        "stop_reason": null,
        "usage": { "input_tokens": 1, "output_tokens": 1 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "end_turn");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_omits_empty_system() {
    let messages = [Message::user("What is IPv6?")];
    let body = ApiRequest { model: "claude", max_tokens: 16, system: "", messages: &messages };
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("system").is_none());
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "What is IPv6?");
}

#[test]
fn request_includes_system_when_present() {
    let messages = [Message::user("q")];
    let body = ApiRequest { model: "claude", max_tokens: 16, system: "be brief", messages: &messages };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["system"], "be brief");
    assert_eq!(json["max_tokens"], 16);
}
