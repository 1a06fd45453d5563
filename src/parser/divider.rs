//! Divider-delimited format parser
//!
//! Sections separated by `---`: first line is the handle, remaining
//! non-blank lines are the body. A single-line section is parsed as
//! `handle: body` instead.

use crate::model::{Comment, RecurringAuthor};

use super::{DIVIDER, clean_handle, find_recurring_author, parse_simple_line};

pub(super) fn parse(text: &str, registry: &[RecurringAuthor]) -> Vec<Comment> {
    let mut comments = Vec::new();

    for section in text.split(DIVIDER) {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let lines: Vec<&str> = section.lines().filter(|l| !l.trim().is_empty()).collect();
        match lines.as_slice() {
            [] => {}
            [only] => {
                if let Some(comment) = parse_simple_line(only, registry) {
                    comments.push(comment);
                }
            }
            [first, rest @ ..] => {
                let handle = clean_handle(first);
                let body = rest.join("\n").trim().to_string();
                if !handle.is_empty() && !body.is_empty() {
                    let recurring_author = find_recurring_author(&handle, registry).cloned();
                    comments.push(Comment {
                        handle,
                        body,
                        recurring_author,
                    });
                }
            }
        }
    }

    comments
}
