use super::*;

// ===== chat completions =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Hello!"));
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_length_is_max_tokens() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "content": "partial" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn cc_parse_null_content_is_empty() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.content.is_empty());
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_messages_prepend_system() {
    let messages = [Message::user("What is IPv6?")];
    let built = build_chat_completions_messages("be helpful", &messages);
    assert_eq!(built.len(), 2);
    assert_eq!(built[0].role, "system");
    assert_eq!(built[0].content, "be helpful");
    assert_eq!(built[1].role, "user");
}

#[test]
fn cc_messages_skip_blank_system() {
    let messages = [Message::user("q")];
    let built = build_chat_completions_messages("  ", &messages);
    assert_eq!(built.len(), 1);
}

// ===== responses API =====

#[test]
fn resp_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "Done!" }]
        }],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Done!"));
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 15);
}

#[test]
fn resp_parse_skips_reasoning_items() {
    let json = serde_json::json!({
        "model": "o4-mini",
        "output": [
            { "type": "reasoning", "summary": [] },
            { "type": "message", "content": [{ "type": "output_text", "text": "answer" }] }
        ]
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text(), "answer");
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(matches!(&resp.content[0], ContentBlock::Text { text } if text == "Fallback text"));
}

#[test]
fn resp_parse_incomplete_is_max_tokens() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [],
        "incomplete_details": { "reason": "max_output_tokens" }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
}

#[test]
fn resp_input_wraps_text_parts() {
    let messages = [Message::user("What is IPv6?")];
    let input = build_responses_input(&messages);
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json[0]["type"], "message");
    assert_eq!(json[0]["role"], "user");
    assert_eq!(json[0]["content"][0]["type"], "input_text");
    assert_eq!(json[0]["content"][0]["text"], "What is IPv6?");
}
