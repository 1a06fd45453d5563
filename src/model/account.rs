//! Account style configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform the account operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X,
    Instagram,
    Both,
}

/// How aggressively generated replies should use emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiLevel {
    None,
    Low,
    Medium,
    High,
}

impl EmojiLevel {
    /// Prompt instruction text for this level
    pub fn instruction(&self) -> &'static str {
        match self {
            EmojiLevel::None => "絵文字は一切使用しない",
            EmojiLevel::Low => "絵文字は控えめに（1-2個程度）",
            EmojiLevel::Medium => "適度に絵文字を使用（3-5個程度）",
            EmojiLevel::High => "絵文字を積極的に使用（文章を彩る程度に）",
        }
    }
}

/// Target length for generated replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyLength {
    Short,
    Medium,
    Long,
}

impl ReplyLength {
    /// Prompt instruction text for this length
    pub fn instruction(&self) -> &'static str {
        match self {
            ReplyLength::Short => "短め（1-2文、簡潔に）",
            ReplyLength::Medium => "普通（2-3文、バランスよく）",
            ReplyLength::Long => "長め（3-4文、丁寧に詳しく）",
        }
    }
}

/// An operator-managed SNS account and its reply style settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    /// Display name of the account
    pub name: String,

    pub platform: Platform,

    /// Freeform character description used in the system prompt
    pub persona: String,

    /// First-person pronoun the account speaks with
    pub first_person: String,

    /// Tone label (e.g. "フレンドリー")
    pub tone: String,

    pub emoji_level: EmojiLevel,

    pub reply_length: ReplyLength,

    /// Freeform extra instructions appended to the system prompt
    pub additional_instructions: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
