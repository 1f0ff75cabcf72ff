//! The parsed chat completion value and its read API.
//!
//! A [`ChatResponse`] is produced only by [`ChatResponse::from_payload`] and
//! is terminal: no field can be changed after construction. Reads come in
//! two equivalent modes, typed accessors and indexed lookup by canonical
//! wire key, both derived from the same projection (see
//! [`ChatResponse::to_map`]).

mod parser;
mod serializer;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{ResponseError, ResponseResult};
use crate::meta::ResponseMeta;
use crate::protocols::chat::ChatChoice;
use crate::protocols::common::Usage;

/// Which payload variant a successful parse produced.
///
/// Error-shaped payloads never construct a value; they surface as
/// [`ResponseError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Full generation response with ranked choices.
    Completion,
    /// Asynchronous acknowledgment carrying only a tracking token; the real
    /// result arrives later through a separate channel.
    Deferred,
}

/// A normalized chat completion response.
///
/// Fields are private and immutable; construction happens exclusively in
/// the parser so the variant discrimination cannot be bypassed. The value
/// owns its choices and usage; `meta` is shared with the caller.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    id: Option<String>,
    kind: ResponseKind,
    object: String,
    created: u64,
    model: String,
    system_fingerprint: Option<String>,
    choices: Vec<ChatChoice>,
    request_id: Option<String>,
    usage: Option<Usage>,
    meta: Arc<ResponseMeta>,
}

impl ChatResponse {
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    /// Unix epoch seconds. Synthesized at parse time for deferred
    /// acknowledgments, which carry no timestamp of their own.
    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_fingerprint(&self) -> Option<&str> {
        self.system_fingerprint.as_deref()
    }

    /// Ranked choices in the exact order the server sent them; empty for
    /// deferred acknowledgments.
    pub fn choices(&self) -> &[ChatChoice] {
        &self.choices
    }

    /// Deferred-completion tracking token. Also preserved on a completion
    /// when the server sends it alongside choices.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn usage(&self) -> Option<&Usage> {
        self.usage.as_ref()
    }

    /// The metadata attached at parse time. Not part of the wire shape and
    /// not reachable through [`ChatResponse::get`].
    pub fn meta(&self) -> &Arc<ResponseMeta> {
        &self.meta
    }

    /// Indexed read by canonical wire key (`id`, `object`, `created`,
    /// `model`, `system_fingerprint`, `choices`, `request_id`, `usage`).
    ///
    /// Reads mirror the serialized form exactly: a key the serializer would
    /// omit (unset optional) reads the same as a key that was never part of
    /// the wire shape. Never silently returns a default.
    pub fn get(&self, key: &str) -> ResponseResult<Value> {
        self.to_map()
            .remove(key)
            .ok_or_else(|| ResponseError::KeyNotFound {
                key: key.to_owned(),
            })
    }
}
