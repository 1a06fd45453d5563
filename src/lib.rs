//! Replykit - reply drafting toolkit for SNS account operators
//!
//! Converts pasted batches of follower comments into structured data for
//! AI-drafted replies, and learns the operator's editing preferences from
//! how drafts get edited.
//!
//! This library provides:
//! - [`model`]: Domain models
//! - [`parser`]: Pasted-comment and generated-reply parsing
//! - [`learning`]: Edit analysis and learned-pattern merging
//! - [`prompt`]: Prompt construction for the generation service
//! - [`generate`]: Interface types for the external generation service

pub mod generate;
pub mod learning;
pub mod model;
pub mod parser;
pub mod prompt;
