//! Colon-delimited fallback parser
//!
//! The most permissive layout: a `handle: body` line opens a comment and
//! subsequent non-matching, non-blank lines continue its body. Used when no
//! other format's markers are present.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Comment, RecurringAuthor};

use super::{clean_handle, flush_comment};

/// Regex for a comment-opening line (ASCII or fullwidth colon)
///
/// Groups:
/// 1. handle (without `@`)
/// 2. rest of the line (may be empty; the body may start on the next line)
static COLON_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@?([0-9A-Za-z_]+)[:：]\s*(.*)$").expect("Invalid colon line regex")
});

pub(super) fn parse(text: &str, registry: &[RecurringAuthor]) -> Vec<Comment> {
    let mut comments = Vec::new();
    let mut handle = String::new();
    let mut body: Vec<String> = Vec::new();

    for line in text.trim().lines() {
        if let Some(caps) = COLON_LINE_REGEX.captures(line) {
            flush_comment(&mut comments, &handle, &body, registry);
            handle = clean_handle(&caps[1]);
            body.clear();
            let rest = &caps[2];
            if !rest.is_empty() {
                body.push(rest.to_string());
            }
        } else if !handle.is_empty() && !line.trim().is_empty() {
            body.push(line.trim().to_string());
        }
    }

    flush_comment(&mut comments, &handle, &body, registry);
    comments
}
