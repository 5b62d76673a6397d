use super::*;

fn completion_json(content: Value) -> String {
    serde_json::json!({
        "id": "gen-1",
        "model": "a/x",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

// =============================================================================
// parse_page_response
// =============================================================================

#[test]
fn page_parse_structured_content() {
    let inner = serde_json::json!({ "html": "<html>ok</html>", "title": "Calculator" }).to_string();
    let page = parse_page_response(&completion_json(Value::String(inner))).unwrap();
    assert_eq!(page.html, "<html>ok</html>");
    assert_eq!(page.title, "Calculator");
}

#[test]
fn page_parse_missing_choices() {
    let json = serde_json::json!({ "model": "a/x", "choices": [] }).to_string();
    let err = parse_page_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn page_parse_content_not_structured() {
    let err = parse_page_response(&completion_json(Value::String("here is your page!".into()))).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(msg) if msg.contains("{html, title}")));
}

#[test]
fn page_parse_body_not_json() {
    assert!(matches!(parse_page_response("<html>502</html>"), Err(LlmError::ApiParse(_))));
}

#[test]
fn page_parse_null_content() {
    let err = parse_page_response(&completion_json(Value::Null)).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(msg) if msg.contains("choices[0]")));
}

// =============================================================================
// parse_text_response
// =============================================================================

#[test]
fn text_parse_plain_content() {
    let text = parse_text_response(&completion_json(Value::String("fast answer".into()))).unwrap();
    assert_eq!(text, "fast answer");
}

#[test]
fn text_parse_defaults_when_content_absent() {
    let json = serde_json::json!({ "model": "a/x", "choices": [{ "message": {} }] }).to_string();
    assert_eq!(parse_text_response(&json).unwrap(), "No response generated");
}

#[test]
fn text_parse_rejects_non_json_body() {
    assert!(parse_text_response("upstream exploded").is_err());
}

// =============================================================================
// request shaping
// =============================================================================

#[test]
fn generation_prompt_embeds_user_prompt_and_constraints() {
    let prompt = build_generation_prompt("a ping pong game");
    assert!(prompt.contains("a ping pong game"));
    assert!(prompt.contains("<style>"));
    assert!(prompt.contains("<script>"));
    assert!(prompt.contains("iframe"));
    assert!(prompt.contains("external dependencies"));
}

#[test]
fn response_format_pins_html_and_title() {
    let format = page_response_format();
    assert_eq!(format.get("type").and_then(Value::as_str), Some("json_schema"));

    let schema = &format["json_schema"]["schema"];
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(required, vec!["html", "title"]);
    assert_eq!(schema["additionalProperties"], Value::Bool(false));
}
