//! Typed normalization layer for OpenAI-compatible chat completion responses.
//!
//! A chat-completion endpoint answers with one of three payload shapes: a
//! full completion carrying ranked choices and token accounting, a deferred
//! acknowledgment carrying only a tracking token, or an error body carrying a
//! human-readable message. This crate turns the raw decoded payload into a
//! single strongly-typed [`ChatResponse`] (or a diagnosable
//! [`ResponseError`]), and projects it back to its canonical wire mapping.
//!
//! The transport layer that produced the payload stays outside: it hands in
//! the decoded `serde_json::Value` together with an opaque [`ResponseMeta`]
//! built from the response headers, and gets a terminal, immutable value
//! back.

pub mod error;
pub mod meta;
pub mod protocols;
pub mod response;

pub use error::{ResponseError, ResponseResult};
pub use meta::ResponseMeta;
pub use response::{ChatResponse, ResponseKind};
