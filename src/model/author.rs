//! Recurring-author registry entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Platform;

/// A follower the operator has pre-registered with relationship notes
///
/// Parsed handles are matched against the registry case-insensitively with
/// substring containment in either direction, to tolerate truncated or
/// platform-mangled handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringAuthor {
    pub id: String,

    /// Author handle without the leading `@`
    pub handle: String,

    pub platform: Platform,

    /// Internal nickname used when drafting replies
    pub nickname: String,

    /// Relationship note (e.g. "初期からのフォロワー")
    pub relationship: String,

    /// Characteristics note
    pub characteristics: String,

    /// How the operator prefers to respond to this author
    pub preferred_response: String,

    /// Number of past interactions
    pub interaction_count: u32,

    /// Most recent interaction, if any
    pub last_interaction: Option<DateTime<Utc>>,

    pub notes: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
