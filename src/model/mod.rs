//! Data models for Replykit
//!
//! UI- and storage-independent data structures representing accounts,
//! recurring authors, parsed comments, and learned edit patterns.

mod account;
mod author;
mod comment;
mod pattern;
mod reply;

pub use account::{Account, EmojiLevel, Platform, ReplyLength};
pub use author::RecurringAuthor;
pub use comment::Comment;
pub use pattern::{Change, LearnedPattern, PatternKind};
pub use reply::ReplyDraft;
