//! Caption-style format parser
//!
//! Body lines terminated by a metadata line (`19時間前返信`,
//! `3日前「いいね！」2件返信`, ...). The layout carries no author handles,
//! so comments get synthetic sequential handles and no recurring-author
//! matching applies. A trailing body with no terminating marker is still
//! flushed as a final comment.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Comment;

/// Regex for a full metadata line: elapsed time, optional like count, then
/// the "replied" suffix
static META_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:時間|日|分|秒)前(?:「?いいね！」?\d+件)?返信$")
        .expect("Invalid caption metadata regex")
});

pub(super) fn parse(text: &str) -> Vec<Comment> {
    let mut comments = Vec::new();
    let mut body: Vec<String> = Vec::new();
    let mut counter = 1usize;

    for raw in text.trim().lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if META_LINE_REGEX.is_match(line) {
            flush(&mut comments, &mut body, &mut counter);
        } else {
            body.push(line.to_string());
        }
    }

    flush(&mut comments, &mut body, &mut counter);
    comments
}

/// Emit the accumulated body under the next synthetic handle
///
/// The counter only advances when a comment is actually emitted, so
/// consecutive metadata lines don't leave gaps in the handle sequence.
fn flush(comments: &mut Vec<Comment>, body: &mut Vec<String>, counter: &mut usize) {
    let joined = body.join("\n").trim().to_string();
    body.clear();
    if joined.is_empty() {
        return;
    }
    comments.push(Comment::new(format!("user_{counter}"), joined));
    *counter += 1;
}
