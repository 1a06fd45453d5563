//! Parsed comment data model

use serde::{Deserialize, Serialize};

use super::RecurringAuthor;

/// A single comment recovered from pasted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Author handle without the leading `@`
    ///
    /// Handle-less formats get synthetic sequential handles
    /// (`user_1`, `user_2`, ...).
    pub handle: String,

    /// Trimmed comment text; may contain embedded newlines, never contains
    /// the source format's control markers
    pub body: String,

    /// The matching registry entry, if the handle matched one
    pub recurring_author: Option<RecurringAuthor>,
}

impl Comment {
    /// Create a comment with no recurring-author match
    pub fn new(handle: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            body: body.into(),
            recurring_author: None,
        }
    }

    /// Whether the author is a registered recurring author
    pub fn is_recurring(&self) -> bool {
        self.recurring_author.is_some()
    }
}
