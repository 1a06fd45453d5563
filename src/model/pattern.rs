//! Edit-change and learned-pattern data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of stylistic change detected in an edited reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    PhraseReplacement,
    ToneAdjustment,
    LengthPreference,
    EmojiChange,
    StructureChange,
}

impl PatternKind {
    /// Stable string form (matches the wire representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::PhraseReplacement => "phrase_replacement",
            PatternKind::ToneAdjustment => "tone_adjustment",
            PatternKind::LengthPreference => "length_preference",
            PatternKind::EmojiChange => "emoji_change",
            PatternKind::StructureChange => "structure_change",
        }
    }
}

/// One stylistic divergence between a generated reply and its edited form
///
/// Produced transiently per analysis call; aggregation happens at merge time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub kind: PatternKind,
    pub original_fragment: String,
    pub replacement_fragment: String,
}

/// A frequency-weighted, persisted editing preference
///
/// Within one account's table the tuple
/// (kind, original_fragment, replacement_fragment) is unique; merging an
/// equal tuple increments `frequency` instead of duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedPattern {
    pub id: String,
    pub account_id: String,
    pub kind: PatternKind,
    pub original_fragment: String,
    pub replacement_fragment: String,
    /// How many times this change has been observed (>= 1)
    pub frequency: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LearnedPattern {
    /// Create a first-occurrence entry from an observed change
    pub fn from_change(account_id: &str, change: &Change) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            kind: change.kind,
            original_fragment: change.original_fragment.clone(),
            replacement_fragment: change.replacement_fragment.clone(),
            frequency: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this entry aggregates the given change
    pub fn matches(&self, change: &Change) -> bool {
        self.kind == change.kind
            && self.original_fragment == change.original_fragment
            && self.replacement_fragment == change.replacement_fragment
    }

    /// Record a repeat observation of the same change
    pub fn record_repeat(&mut self) {
        self.frequency += 1;
        self.updated_at = Utc::now();
    }
}
