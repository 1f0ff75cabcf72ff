use thiserror::Error;

/// Result type for response normalization operations
pub type ResponseResult<T> = Result<T, ResponseError>;

/// Errors raised while normalizing or reading a chat completion response
///
/// Every variant is terminal for the call that raised it; there is no
/// recovery or retry at this layer. Retries, if any, belong to the
/// transport.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The transport handed back a bare string instead of a decoded object.
    /// The string is surfaced verbatim since it is usually the partially
    /// decoded body and carries the actual diagnostic.
    #[error("{0}")]
    MalformedPayload(String),

    /// The server answered with an error-shaped body; the message is taken
    /// verbatim from its `message` field.
    #[error("{message}")]
    Api { message: String },

    /// A field required to interpret the payload is absent or has the wrong
    /// shape.
    #[error("missing or non-array field: {field}")]
    MissingField { field: &'static str },

    /// Indexed read of a key that is not part of the canonical wire shape
    /// (or is an optional the server did not send).
    #[error("unknown response key: {key}")]
    KeyNotFound { key: String },

    /// Envelope or sub-entity deserialization failure, passed through
    /// unchanged.
    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),
}
