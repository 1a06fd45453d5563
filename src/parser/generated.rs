//! Generation-response parser
//!
//! The generation service is instructed to return replies in the
//! divider-delimited shape: an `@handle` line, reply lines, then `---`.
//! Sections lacking a recognizable leading handle token or with an empty
//! reply are dropped silently.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ReplyDraft;

use super::DIVIDER;

/// Regex for the leading handle token of a reply section
static REPLY_HANDLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?([0-9A-Za-z_]+)").expect("Invalid reply handle regex"));

/// Split the generation service's output into per-author reply drafts
pub fn parse_generated_replies(text: &str) -> Vec<ReplyDraft> {
    let mut replies = Vec::new();

    for section in text.split(DIVIDER) {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let mut lines = section.lines();
        let Some(first) = lines.next() else {
            continue;
        };
        let Some(caps) = REPLY_HANDLE_REGEX.captures(first) else {
            continue;
        };

        let handle = caps[1].to_string();
        let reply = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        if !reply.is_empty() {
            replies.push(ReplyDraft { handle, reply });
        }
    }

    replies
}
