//! Generic JSON renderer.
//!
//! Maps an arbitrary JSON value to a tree of display nodes by shape, with no
//! per-field templates. Classification precedence:
//!
//! 1. arrays → [`DisplayNode::List`], elements in order
//! 2. objects → [`DisplayNode::Record`], entries in the object's key order,
//!    labels with `_` replaced by spaces
//! 3. strings starting with `http` → audio / image / link by suffix
//! 4. any other scalar → [`DisplayNode::Text`] with its literal form
//!
//! [`render`] is total and unbounded. [`render_bounded`] refuses to descend
//! past a container depth limit instead.

mod classify;
mod outline;

use serde_json::Value;
use thiserror::Error;

pub use classify::{classify_url, looks_like_url, UrlKind};
pub use outline::{outline, write_outline};

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayNode {
    List(Vec<DisplayNode>),
    Record(Vec<RecordEntry>),
    Audio { url: String },
    Image { url: String },
    Link { url: String },
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    /// Original object key.
    pub key: String,
    /// Key as shown to the user.
    pub label: String,
    pub value: DisplayNode,
}

impl RecordEntry {
    fn new(key: &str, value: DisplayNode) -> Self {
        Self {
            key: key.to_string(),
            label: humanize_key(key),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("value nests deeper than the render limit of {limit}")]
    DepthExceeded { limit: usize },
}

pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

pub fn render(value: &Value) -> DisplayNode {
    match value {
        Value::Array(items) => DisplayNode::List(items.iter().map(render).collect()),
        Value::Object(map) => DisplayNode::Record(
            map.iter()
                .map(|(k, v)| RecordEntry::new(k, render(v)))
                .collect(),
        ),
        Value::String(s) => render_string(s),
        other => DisplayNode::Text(other.to_string()),
    }
}

/// Like [`render`] but fails once more than `max_depth` containers are nested.
pub fn render_bounded(value: &Value, max_depth: usize) -> Result<DisplayNode, RenderError> {
    walk(value, max_depth, max_depth)
}

fn walk(value: &Value, remaining: usize, limit: usize) -> Result<DisplayNode, RenderError> {
    match value {
        Value::Array(_) | Value::Object(_) if remaining == 0 => {
            Err(RenderError::DepthExceeded { limit })
        }
        Value::Array(items) => items
            .iter()
            .map(|v| walk(v, remaining - 1, limit))
            .collect::<Result<_, _>>()
            .map(DisplayNode::List),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| walk(v, remaining - 1, limit).map(|node| RecordEntry::new(k, node)))
            .collect::<Result<_, _>>()
            .map(DisplayNode::Record),
        Value::String(s) => Ok(render_string(s)),
        other => Ok(DisplayNode::Text(other.to_string())),
    }
}

fn render_string(s: &str) -> DisplayNode {
    if !looks_like_url(s) {
        return DisplayNode::Text(s.to_string());
    }
    let url = s.to_string();
    match classify_url(s) {
        UrlKind::Audio => DisplayNode::Audio { url },
        UrlKind::Image => DisplayNode::Image { url },
        UrlKind::Link => DisplayNode::Link { url },
    }
}
