//! Interface types for the external reply-generation service
//!
//! The HTTP client lives outside this crate; this module defines the shapes
//! exchanged with it and the contract the orchestration layer implements.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Account, Comment, LearnedPattern, ReplyDraft};

/// Concrete model identifiers accepted by the generation service
pub mod models {
    pub const SONNET: &str = "claude-sonnet-4-20250514";
    pub const HAIKU: &str = "claude-3-5-haiku-20241022";
}

/// Number of comments sent per generation request
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Which generation model to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Sonnet,
    Haiku,
}

impl ModelKind {
    /// The service-side model identifier
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelKind::Sonnet => models::SONNET,
            ModelKind::Haiku => models::HAIKU,
        }
    }
}

/// A reply-generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub comments: Vec<Comment>,
    pub account: Account,
    #[serde(default)]
    pub learned_patterns: Vec<LearnedPattern>,
    #[serde(default)]
    pub model: ModelKind,
}

/// A successful reply-generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub replies: Vec<ReplyDraft>,
}

/// Errors the generation boundary can surface
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("API key was rejected")]
    InvalidApiKey,

    #[error("rate limited by the generation service")]
    RateLimited,

    #[error("generation service returned no usable text")]
    EmptyResponse,

    #[error("generation service error: {0}")]
    Service(String),
}

/// Contract implemented by the orchestration layer's service client
pub trait ReplyGenerator {
    fn generate_replies(&self, request: &GenerateRequest)
    -> Result<GenerateResponse, GenerateError>;
}

/// Split comments into service-sized batches
pub fn batches(comments: &[Comment], batch_size: usize) -> impl Iterator<Item = &[Comment]> {
    comments.chunks(batch_size.max(1))
}
