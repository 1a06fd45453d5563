//! Generated reply data model

use serde::{Deserialize, Serialize};

/// One drafted reply recovered from the generation service's output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDraft {
    /// Handle of the comment author this reply addresses
    pub handle: String,

    /// The drafted reply text
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_draft_roundtrip() {
        let draft = ReplyDraft {
            handle: "alice".to_string(),
            reply: "こちらこそありがとう！".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        let back: ReplyDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
