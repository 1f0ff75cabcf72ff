//! Integration tests for the canonical mapping projection.

use std::sync::Arc;

use chatwire::{ChatResponse, ResponseMeta};
use serde_json::json;

fn parse(payload: serde_json::Value) -> ChatResponse {
    ChatResponse::from_payload(payload, Arc::new(ResponseMeta::default())).unwrap()
}

#[test]
fn completion_round_trips_every_present_field() {
    let payload = json!({
        "id": "chatcmpl_abc123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "system_fingerprint": "fp_44709d6fcb",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "First."},
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": {"role": "assistant", "content": "Second."},
                "finish_reason": "length"
            }
        ],
        "request_id": "req_55",
        "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
    });

    let map = parse(payload.clone()).to_map();

    assert_eq!(map["id"], payload["id"]);
    assert_eq!(map["object"], payload["object"]);
    assert_eq!(map["created"], payload["created"]);
    assert_eq!(map["model"], payload["model"]);
    assert_eq!(map["system_fingerprint"], payload["system_fingerprint"]);
    assert_eq!(map["request_id"], payload["request_id"]);
    assert_eq!(map["usage"], payload["usage"]);

    // choices keep their order
    let choices = map["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0]["index"], json!(0));
    assert_eq!(choices[0]["message"]["content"], json!("First."));
    assert_eq!(choices[1]["index"], json!(1));
    assert_eq!(choices[1]["finish_reason"], json!("length"));
}

#[test]
fn absent_optionals_are_omitted_entirely() {
    let map = parse(json!({
        "id": "x",
        "object": "chat.completion",
        "created": 1,
        "model": "m",
        "choices": []
    }))
    .to_map();

    assert!(!map.contains_key("system_fingerprint"));
    assert!(!map.contains_key("request_id"));
    assert!(!map.contains_key("usage"));
    assert!(map.contains_key("id"));
    // empty-but-present survives; only true absence is omitted
    assert_eq!(map["choices"], json!([]));
}

#[test]
fn tool_call_choice_round_trips() {
    let payload = json!({
        "id": "chatcmpl_tool",
        "object": "chat.completion",
        "created": 1700000500,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_9",
                    "type": "function",
                    "function": {"name": "lookup", "arguments": "{\"q\":\"rust\"}"}
                }]
            },
            "finish_reason": "tool_calls"
        }]
    });

    let map = parse(payload.clone()).to_map();
    let choice = &map["choices"][0];

    // nullable content stays an explicit null, not an omitted key
    assert!(choice["message"]["content"].is_null());
    assert_eq!(
        choice["message"]["tool_calls"],
        payload["choices"][0]["message"]["tool_calls"]
    );
    assert_eq!(choice["finish_reason"], json!("tool_calls"));
}

#[test]
fn annotated_choice_round_trips() {
    let payload = json!({
        "id": "chatcmpl_cit",
        "object": "chat.completion",
        "created": 1700000900,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Quoting the docs.",
                "annotations": [{
                    "type": "url_citation",
                    "url_citation": {
                        "start_index": 0,
                        "end_index": 7,
                        "title": "The Docs",
                        "url": "https://example.com"
                    }
                }]
            },
            "finish_reason": "stop"
        }]
    });

    let map = parse(payload.clone()).to_map();
    assert_eq!(
        map["choices"][0]["message"]["annotations"],
        payload["choices"][0]["message"]["annotations"]
    );
}

#[test]
fn logprobs_round_trip() {
    let payload = json!({
        "id": "chatcmpl_lp",
        "object": "chat.completion",
        "created": 1700000700,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Hi"},
            "logprobs": {
                "content": [
                    {"token": "Hi", "logprob": -0.31, "bytes": [72, 105]},
                    {"token": "!", "logprob": -1.02, "bytes": null}
                ]
            },
            "finish_reason": "stop"
        }]
    });

    let map = parse(payload.clone()).to_map();
    assert_eq!(
        map["choices"][0]["logprobs"],
        payload["choices"][0]["logprobs"]
    );
}

#[test]
fn usage_detail_breakdowns_round_trip() {
    let payload = json!({
        "id": "chatcmpl_u",
        "object": "chat.completion",
        "created": 1700001000,
        "model": "o3-mini",
        "choices": [],
        "usage": {
            "prompt_tokens": 100,
            "completion_tokens": 40,
            "total_tokens": 140,
            "prompt_tokens_details": {"cached_tokens": 64},
            "completion_tokens_details": {
                "reasoning_tokens": 32,
                "accepted_prediction_tokens": 4,
                "rejected_prediction_tokens": 0
            }
        }
    });

    let map = parse(payload.clone()).to_map();
    assert_eq!(map["usage"], payload["usage"]);
}

#[test]
fn deferred_value_projects_synthesized_fields() {
    let map = parse(json!({"request_id": "req_123"})).to_map();

    assert_eq!(map["object"], json!("deferred.completion"));
    assert_eq!(map["model"], json!("unknown"));
    assert_eq!(map["request_id"], json!("req_123"));
    assert_eq!(map["choices"], json!([]));
    assert!(!map.contains_key("id"));
    assert!(!map.contains_key("system_fingerprint"));
    assert!(!map.contains_key("usage"));
    assert!(map["created"].as_u64().unwrap() > 0);
}

#[test]
fn projection_does_not_leak_metadata() {
    let meta = Arc::new(ResponseMeta::from_headers([("x-request-id", "req_secret")]));
    let response =
        ChatResponse::from_payload(json!({"request_id": "req_123"}), meta).unwrap();

    let map = response.to_map();
    assert!(!map.contains_key("meta"));
    assert_eq!(map.len(), 5); // object, created, model, choices, request_id
}
