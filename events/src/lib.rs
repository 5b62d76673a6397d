//! Shared generation-event model and line codec for the result stream.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! A generation run is an unbounded sequence of [`GenerationResult`] records,
//! one per requested model, serialized as one JSON object per line behind a
//! fixed `data: ` marker and terminated by a blank line:
//!
//! ```text
//! data: {"modelIndex":0,"model":"a/x","success":true,"data":{...}}
//!
//! data: {"modelIndex":1,"model":"b/y","success":false,"error":"..."}
//! ```
//!
//! Records arrive in completion order, not request order; consumers route by
//! `modelIndex`, never by arrival position. [`StreamDecoder`] reassembles
//! records from arbitrarily chunked bytes so transport framing never leaks
//! into the client.

use serde::{Deserialize, Serialize};

/// Marker prefixing every event line on the wire.
pub const EVENT_PREFIX: &str = "data: ";

/// Longest slice of a bad line echoed back in a [`DecodeError`].
const ERROR_SNIPPET_LEN: usize = 120;

// =============================================================================
// ERROR
// =============================================================================

/// Error returned by [`StreamDecoder`] for a single event line.
///
/// A decode error condemns only the line that produced it; the decoder keeps
/// its buffer intact and subsequent lines decode normally.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The line contains bytes that are not valid UTF-8.
    #[error("event line is not valid UTF-8")]
    InvalidUtf8,

    /// The line does not start with the `data: ` marker.
    #[error("event line missing `data: ` marker: {0:?}")]
    MissingMarker(String),

    /// The payload after the marker is not a valid `GenerationResult`.
    #[error("event payload rejected: {0}")]
    Payload(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// A single generation run, as submitted by the client.
///
/// Invariants (enforced by the server before any external call): `prompt` is
/// non-empty, `models` is non-empty, `api_key` is non-empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Natural-language description of the page to build.
    pub prompt: String,
    /// Ordered model identifiers; index in this list is the panel position.
    pub models: Vec<String>,
    /// Pass-through OpenRouter credential. Never persisted server-side.
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// The structured output requested from every model call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    /// Complete HTML document with inline CSS and JavaScript.
    pub html: String,
    /// Short title describing what was created.
    pub title: String,
}

/// Outcome of one model call, tagged with its request-time position.
///
/// Exactly one of `data` / `error` is present, keyed by `success`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Position of the model in the originating request's `models` list.
    #[serde(rename = "modelIndex")]
    pub model_index: usize,
    /// Model identifier the call was issued against.
    pub model: String,
    /// Whether the call produced a page.
    pub success: bool,
    /// The generated page, when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<GeneratedPage>,
    /// Human-readable failure message, when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// Successful result carrying a generated page.
    #[must_use]
    pub fn page(model_index: usize, model: impl Into<String>, page: GeneratedPage) -> Self {
        Self { model_index, model: model.into(), success: true, data: Some(page), error: None }
    }

    /// Failed result carrying an error message.
    #[must_use]
    pub fn failure(model_index: usize, model: impl Into<String>, message: impl Into<String>) -> Self {
        Self { model_index, model: model.into(), success: false, data: None, error: Some(message.into()) }
    }
}

// =============================================================================
// ENCODE
// =============================================================================

/// Encode a result as one wire record: `data: <json>\n\n`.
#[must_use]
pub fn encode_event(result: &GenerationResult) -> String {
    // Serializing a plain struct with no non-string map keys cannot fail.
    let json = serde_json::to_string(result).unwrap_or_default();
    format!("{EVENT_PREFIX}{json}\n\n")
}

// =============================================================================
// DECODE
// =============================================================================

/// Incremental decoder for the event stream.
///
/// Feed raw transport chunks with [`push`](Self::push); complete lines are
/// decoded as they become available and partial lines are buffered until the
/// terminating newline arrives. Blank separator lines are consumed silently.
/// Call [`finish`](Self::finish) at end-of-stream to flush an unterminated
/// trailing line, if any.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
}

impl StreamDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes; returns one entry per complete line consumed.
    ///
    /// Chunk boundaries are arbitrary: a record split at any byte offset
    /// decodes identically to the same record delivered whole. Lines are
    /// terminated by `\n`; a trailing `\r` is stripped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<GenerationResult, DecodeError>> {
        self.buffer.extend_from_slice(chunk);

        let mut decoded = Vec::new();
        while let Some(end) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            if let Some(entry) = decode_line(&line[..end]) {
                decoded.push(entry);
            }
        }
        decoded
    }

    /// Flush an unterminated trailing line at end-of-stream.
    ///
    /// Well-formed streams end every record with a newline, so this normally
    /// returns `None`; a truncated final record surfaces here instead of being
    /// dropped silently.
    pub fn finish(&mut self) -> Option<Result<GenerationResult, DecodeError>> {
        let rest = std::mem::take(&mut self.buffer);
        decode_line(&rest)
    }

    /// Number of buffered bytes still waiting for a line terminator.
    #[must_use]
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }
}

/// Decode one line (without its `\n`). `None` for blank separator lines.
fn decode_line(line: &[u8]) -> Option<Result<GenerationResult, DecodeError>> {
    let line = match line {
        [head @ .., b'\r'] => head,
        other => other,
    };
    if line.is_empty() {
        return None;
    }

    let Ok(text) = std::str::from_utf8(line) else {
        return Some(Err(DecodeError::InvalidUtf8));
    };
    let Some(json) = text.strip_prefix(EVENT_PREFIX) else {
        return Some(Err(DecodeError::MissingMarker(snippet(text))));
    };

    Some(serde_json::from_str::<GenerationResult>(json).map_err(|e| DecodeError::Payload(e.to_string())))
}

/// Truncate a bad line for inclusion in an error message.
fn snippet(text: &str) -> String {
    let mut end = text.len().min(ERROR_SNIPPET_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_owned()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
