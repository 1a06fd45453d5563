//! Pasted-comment parser
//!
//! Segments an arbitrary block of text pasted from a social platform's web UI
//! into structured comments. The layout is detected heuristically; detection
//! is checked in strict priority order and the first match wins, explicit
//! markers before the permissive colon fallback.

mod caption;
mod colon;
mod divider;
mod generated;
mod numbered;
mod timeline;

pub use generated::parse_generated_replies;


use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Comment, RecurringAuthor};

/// Divider sequence separating sections in divider-delimited input
/// (and in the generation service's reply output)
pub const DIVIDER: &str = "---";

/// Regex for a line that is only an `@handle`
/// Example: `@tanaka_taro`
///
/// Handles are ASCII word characters, matching what platforms allow.
static HANDLE_ONLY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*@[0-9A-Za-z_]+\s*$").expect("Invalid handle line regex")
});

/// Regex for a middle-dot month/day date marker
/// Example: `· 8月6日`
static DATE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"·\s*\d+月\d+日").expect("Invalid date marker regex"));

/// Regex for caption-style metadata markers: elapsed-time-plus-replied
/// (`19時間前返信`) or a like-count annotation (`「いいね！」3件`)
static CAPTION_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:時間|日|分|秒)前.*返信|「?いいね！」?\d+件")
        .expect("Invalid caption marker regex")
});

/// Regex for a numbered-list opening line: `<digits>.` then `handle:`
/// Example: `1. @alice: hello`
static NUMBERED_FIRST_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*@?[0-9A-Za-z_]+:").expect("Invalid numbered first line regex")
});

/// Regex for a single `handle: body` line (ASCII or fullwidth colon)
///
/// Groups:
/// 1. handle (without `@`)
/// 2. body (non-empty)
static SIMPLE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@?([0-9A-Za-z_]+)[:：]\s*(.+)$").expect("Invalid simple line regex")
});

/// Supported pasted-text layouts, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Display name / `@handle` / middle-dot date / body blocks
    Timeline,
    /// Body blocks terminated by elapsed-time "replied" markers, no handles
    Caption,
    /// Sections separated by `---`
    Divider,
    /// `<n>. handle: body` lines
    Numbered,
    /// `handle: body` lines with continuation lines (fallback)
    Colon,
}

/// Detect which layout the pasted text uses
///
/// Checked in strict priority order; once an earlier pattern matches, later
/// patterns are not attempted even if the text would also satisfy them.
pub fn detect_format(text: &str) -> InputFormat {
    if HANDLE_ONLY_LINE_REGEX.is_match(text) && DATE_MARKER_REGEX.is_match(text) {
        InputFormat::Timeline
    } else if CAPTION_MARKER_REGEX.is_match(text) {
        InputFormat::Caption
    } else if text.contains(DIVIDER) {
        InputFormat::Divider
    } else if text
        .trim_start()
        .lines()
        .next()
        .is_some_and(|line| NUMBERED_FIRST_LINE_REGEX.is_match(line))
    {
        InputFormat::Numbered
    } else {
        InputFormat::Colon
    }
}

/// Parse pasted comment text into ordered comments
///
/// Pure and total: empty or whitespace-only input yields an empty list, and
/// unparseable lines are dropped rather than reported. Handles are matched
/// against `registry` (except in the handle-less caption format).
pub fn parse(text: &str, registry: &[RecurringAuthor]) -> Vec<Comment> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let format = detect_format(text);
    tracing::debug!(?format, "detected pasted-comment layout");

    match format {
        InputFormat::Timeline => timeline::parse(text, registry),
        InputFormat::Caption => caption::parse(text),
        InputFormat::Divider => divider::parse(text, registry),
        InputFormat::Numbered => numbered::parse(text, registry),
        InputFormat::Colon => colon::parse(text, registry),
    }
}

/// Normalize a raw handle token: trim, strip one leading `@` and one
/// trailing colon (ASCII or fullwidth)
fn clean_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('@').unwrap_or(trimmed);
    let trimmed = trimmed
        .strip_suffix(':')
        .or_else(|| trimmed.strip_suffix('：'))
        .unwrap_or(trimmed);
    trimmed.to_string()
}

/// Find the registry entry matching a parsed handle
///
/// Case-insensitive, and permits substring containment in either direction
/// (registry handle contains parsed handle, or vice versa) to tolerate
/// truncated or platform-mangled handles. First registry match wins.
pub fn find_recurring_author<'a>(
    handle: &str,
    registry: &'a [RecurringAuthor],
) -> Option<&'a RecurringAuthor> {
    let needle = handle.to_lowercase();
    registry.iter().find(|author| {
        let registered = author.handle.to_lowercase();
        registered == needle || registered.contains(&needle) || needle.contains(&registered)
    })
}

/// Parse a single `handle: body` line into a comment
fn parse_simple_line(line: &str, registry: &[RecurringAuthor]) -> Option<Comment> {
    let caps = SIMPLE_LINE_REGEX.captures(line.trim())?;
    let handle = clean_handle(&caps[1]);
    let body = caps[2].trim().to_string();
    if handle.is_empty() || body.is_empty() {
        return None;
    }
    let recurring_author = find_recurring_author(&handle, registry).cloned();
    Some(Comment {
        handle,
        body,
        recurring_author,
    })
}

/// Flush an accumulated (handle, body lines) pair into `comments`
///
/// Silently discards pairs with no handle or an empty joined body.
fn flush_comment(
    comments: &mut Vec<Comment>,
    handle: &str,
    body_lines: &[String],
    registry: &[RecurringAuthor],
) {
    if handle.is_empty() || body_lines.is_empty() {
        return;
    }
    let body = body_lines.join("\n").trim().to_string();
    if body.is_empty() {
        return;
    }
    let recurring_author = find_recurring_author(handle, registry).cloned();
    comments.push(Comment {
        handle: handle.to_string(),
        body,
        recurring_author,
    });
}

/// Render parsed comments as a numbered preview list
///
/// Used by the operator-facing confirmation step and as the comment list in
/// the generation prompt.
pub fn preview_text(comments: &[Comment]) -> String {
    comments
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. @{}: {}", i + 1, c.handle, c.body))
        .collect::<Vec<_>>()
        .join("\n")
}
