//! Out-of-band response metadata.
//!
//! The transport layer builds a [`ResponseMeta`] from the HTTP response
//! headers and passes it alongside the decoded body. The normalization layer
//! attaches it to the parsed value and never interprets it; it is read back
//! by callers that care about request ids or rate-limit accounting.

/// Opaque metadata attached to a parsed response.
///
/// Header names are matched case-insensitively. The full header list is kept
/// so callers can read provider-specific headers this crate knows nothing
/// about.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    headers: Vec<(String, String)>,
}

impl ResponseMeta {
    /// Build from response header name/value pairs.
    pub fn from_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Raw header lookup, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The server-assigned request id, if the provider sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Server-side processing time in milliseconds, if reported.
    pub fn processing_ms(&self) -> Option<u64> {
        self.header("openai-processing-ms")
            .and_then(|value| value.parse().ok())
    }
}
