//! Invocation Result Value Objects

use serde::{Deserialize, Serialize};

/// A single content item returned by a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Plain text payload
    Text {
        /// The text
        text: String,
    },
}

impl ToolContent {
    /// Text payload of this item, if it is a text item
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// Value Object: Invocation Result
///
/// Ordered content produced by one tool call. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvocationResult {
    /// Content items in the order the tool produced them
    pub content: Vec<ToolContent>,
}

impl InvocationResult {
    /// Result holding a single text item
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    /// Iterate over the text payloads
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(ToolContent::as_text)
    }
}
