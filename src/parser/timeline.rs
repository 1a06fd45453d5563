//! Timeline-style format parser
//!
//! Repeating blocks of `display name` / `@handle` / `· <date>` / body lines,
//! with no delimiter between blocks. A small state machine tracks where in
//! the block we are; every new `@handle` line flushes the accumulated body
//! and starts the next block.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Comment, RecurringAuthor};

use super::flush_comment;

/// Regex for a trimmed line that is exactly `@handle`
static HANDLE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([0-9A-Za-z_]+)$").expect("Invalid timeline handle regex"));

/// Regex for the date metadata line, with or without the leading middle dot
/// Examples: `8月6日`, `· 8月6日`
static DATE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^·?\s*\d+月\d+日").expect("Invalid timeline date regex"));

/// Where in a timeline block the scan currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the first `@handle` line; everything is ignored
    SeekingHandle,
    /// After `@handle`; waiting for the date metadata line
    ///
    /// A bare `·` (date on the following line) stays in this state so the
    /// date itself is consumed as metadata, never as body text.
    SeekingDate,
    /// After the date; accumulating body lines
    ReadingBody,
}

pub(super) fn parse(text: &str, registry: &[RecurringAuthor]) -> Vec<Comment> {
    let lines: Vec<&str> = text.trim().lines().collect();
    let mut comments = Vec::new();
    let mut handle = String::new();
    let mut body: Vec<String> = Vec::new();
    let mut state = State::SeekingHandle;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // A new @handle line terminates the current block
        if let Some(caps) = HANDLE_LINE_REGEX.captures(line) {
            flush_comment(&mut comments, &handle, &body, registry);
            handle = caps[1].to_string();
            body.clear();
            state = State::SeekingDate;
            continue;
        }

        match state {
            State::SeekingHandle => {}
            State::SeekingDate => {
                if DATE_LINE_REGEX.is_match(line) {
                    state = State::ReadingBody;
                }
            }
            State::ReadingBody => {
                // A line immediately before an @handle line is the next
                // block's display name, not body text
                let next_is_handle = lines
                    .get(i + 1)
                    .is_some_and(|next| next.trim().starts_with('@'));
                if !next_is_handle {
                    body.push(line.to_string());
                }
            }
        }
    }

    flush_comment(&mut comments, &handle, &body, registry);
    comments
}
