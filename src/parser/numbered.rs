//! Numbered-list format parser
//!
//! Lines of the form `<n>. handle: body`. The numbering prefix is stripped
//! and the remainder parsed as a simple `handle: body` line; lines without a
//! numbering prefix are dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Comment, RecurringAuthor};

use super::parse_simple_line;

/// Regex for a numbered line
///
/// Groups:
/// 1. everything after the `<digits>.` prefix
static NUMBERED_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+)$").expect("Invalid numbered line regex"));

pub(super) fn parse(text: &str, registry: &[RecurringAuthor]) -> Vec<Comment> {
    text.trim()
        .lines()
        .filter_map(|line| {
            let caps = NUMBERED_LINE_REGEX.captures(line)?;
            parse_simple_line(&caps[1], registry)
        })
        .collect()
}
