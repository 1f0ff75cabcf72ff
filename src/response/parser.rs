//! Payload discrimination and parsing.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ResponseError, ResponseResult};
use crate::meta::ResponseMeta;
use crate::protocols::chat::ChatChoice;
use crate::protocols::common::Usage;
use crate::protocols::{DEFERRED_COMPLETION_OBJECT, UNKNOWN_MODEL_ID};
use crate::response::{ChatResponse, ResponseKind};

/// Envelope for the completion path. `object`, `created` and `model` are
/// required; their absence or wrong type surfaces as the underlying
/// deserialization error rather than a separate guard. Choices parse
/// atomically: one bad element fails the whole envelope.
#[derive(Deserialize)]
struct CompletionEnvelope {
    id: Option<String>,
    object: String,
    created: u64,
    model: String,
    system_fingerprint: Option<String>,
    choices: Vec<ChatChoice>,
    request_id: Option<String>,
    usage: Option<Usage>,
}

impl ChatResponse {
    /// Normalize a raw decoded payload into a typed response.
    ///
    /// Discrimination runs in a fixed priority order; a payload satisfying
    /// more than one condition must resolve deterministically:
    ///
    /// 1. a bare string fails as [`ResponseError::MalformedPayload`],
    ///    surfacing the string verbatim;
    /// 2. an object with `request_id` and no `choices` key is a deferred
    ///    acknowledgment (this branch never fails);
    /// 3. an object whose `choices` is absent or not an array fails as
    ///    [`ResponseError::Api`] when a `message` field is present,
    ///    otherwise as [`ResponseError::MissingField`];
    /// 4. everything else parses as a completion.
    ///
    /// On failure no partial value escapes. `meta` is attached verbatim and
    /// never inspected.
    pub fn from_payload(payload: Value, meta: Arc<ResponseMeta>) -> ResponseResult<ChatResponse> {
        let map = match payload {
            Value::String(raw) => return Err(ResponseError::MalformedPayload(raw)),
            Value::Object(map) => map,
            // Numbers, arrays, booleans and null have no choices and no
            // message to surface.
            _ => return Err(ResponseError::MissingField { field: "choices" }),
        };

        if let Some(token) = map.get("request_id") {
            if !map.contains_key("choices") {
                // Opaque tracking token; a non-string value is kept as its
                // JSON text rendering so this branch cannot fail.
                let request_id = match token {
                    Value::String(token) => token.clone(),
                    other => other.to_string(),
                };
                debug!(request_id = %request_id, "deferred completion acknowledgment");
                return Ok(ChatResponse {
                    id: None,
                    kind: ResponseKind::Deferred,
                    object: DEFERRED_COMPLETION_OBJECT.to_owned(),
                    created: Utc::now().timestamp() as u64,
                    model: UNKNOWN_MODEL_ID.to_owned(),
                    system_fingerprint: None,
                    choices: Vec::new(),
                    request_id: Some(request_id),
                    usage: None,
                    meta,
                });
            }
        }

        if !matches!(map.get("choices"), Some(Value::Array(_))) {
            return Err(match map.get("message") {
                Some(Value::String(message)) => ResponseError::Api {
                    message: message.clone(),
                },
                Some(other) => ResponseError::Api {
                    message: other.to_string(),
                },
                None => ResponseError::MissingField { field: "choices" },
            });
        }

        let envelope: CompletionEnvelope = serde_json::from_value(Value::Object(map))?;
        debug!(
            model = %envelope.model,
            choices = envelope.choices.len(),
            "chat completion parsed"
        );
        Ok(ChatResponse {
            id: envelope.id,
            kind: ResponseKind::Completion,
            object: envelope.object,
            created: envelope.created,
            model: envelope.model,
            system_fingerprint: envelope.system_fingerprint,
            choices: envelope.choices,
            request_id: envelope.request_id,
            usage: envelope.usage,
            meta,
        })
    }
}
