//! Choice-level wire types for chat completion responses.
//!
//! These types carry their own serde contract; the envelope parser maps
//! each raw `choices` element through [`ChatChoice`]'s `Deserialize` impl
//! and propagates any failure unchanged.

use serde::{Deserialize, Serialize};

// ============================================================================
// Choices
// ============================================================================

/// One ranked candidate generation within a completion.
///
/// Ordering across choices is authoritative: index 0 is the primary
/// generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatCompletionMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<ChatLogProbs>,
    pub finish_reason: Option<String>, // "stop", "length", "tool_calls", "content_filter", "function_call"
}

/// Response-side message. `content` is nullable (tool and function calls
/// answer without text) and stays on the wire as an explicit null.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatCompletionMessage {
    pub role: String, // always "assistant" for responses
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

// ============================================================================
// Annotations
// ============================================================================

/// Inline annotation attached to generated content.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub annotation_type: String, // "url_citation"
    pub url_citation: UrlCitation,
}

/// Span of the content that cites an external URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlCitation {
    pub start_index: u32,
    pub end_index: u32,
    pub title: String,
    pub url: String,
}

// ============================================================================
// Tool / Function Calls
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub tool_type: String, // currently always "function"
    pub function: FunctionCall,
}

/// Function invocation emitted by the model. `arguments` is the raw JSON
/// string exactly as generated; it is not decoded here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

// ============================================================================
// Log Probabilities
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatLogProbs {
    pub content: Option<Vec<ChatLogProbsContent>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatLogProbsContent {
    pub token: String,
    pub logprob: f64,
    pub bytes: Option<Vec<u8>>,
}
