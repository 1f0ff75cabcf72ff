// Wire-format type definitions for the chat completion protocol.

/// Model identifier synthesized when the server does not report one.
///
/// Deferred acknowledgments carry no model field; this constant should be
/// used instead of hardcoded "unknown" strings so downstream consumers have
/// one name to compare against.
pub const UNKNOWN_MODEL_ID: &str = "unknown";

/// Object label synthesized for deferred completion acknowledgments.
///
/// The server sends no `object` field on the deferred path; this marker
/// keeps the field populated with a shape downstream consumers can
/// discriminate on.
pub const DEFERRED_COMPLETION_OBJECT: &str = "deferred.completion";

pub mod chat;
pub mod common;
