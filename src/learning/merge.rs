//! Learned-pattern table merging
//!
//! The authoritative aggregation point for detected changes: the analyzer
//! never deduplicates, so equal tuples are folded here. Callers must
//! serialize merges per account to preserve the uniqueness invariant.

use crate::model::{Change, LearnedPattern};

use super::MIN_PATTERN_FREQUENCY;

/// Fold newly detected changes into an account's pattern table
///
/// An existing entry with the same account and identical
/// (kind, original_fragment, replacement_fragment) gets its frequency
/// incremented and its update time refreshed; anything else is appended as a
/// fresh frequency-1 entry.
pub fn merge_patterns(
    mut existing: Vec<LearnedPattern>,
    changes: &[Change],
    account_id: &str,
) -> Vec<LearnedPattern> {
    for change in changes {
        let found = existing
            .iter()
            .position(|p| p.account_id == account_id && p.matches(change));
        match found {
            Some(index) => {
                let entry = &mut existing[index];
                entry.record_repeat();
                tracing::debug!(
                    kind = entry.kind.as_str(),
                    frequency = entry.frequency,
                    "reinforced learned pattern"
                );
            }
            None => existing.push(LearnedPattern::from_change(account_id, change)),
        }
    }

    existing
}

/// Select the patterns worth injecting into a prompt
///
/// Entries observed at least twice, ordered by frequency descending, capped
/// at `limit` (callers usually pass [`super::DEFAULT_PATTERN_LIMIT`]).
pub fn top_patterns(patterns: &[LearnedPattern], limit: usize) -> Vec<&LearnedPattern> {
    let mut qualified: Vec<&LearnedPattern> = patterns
        .iter()
        .filter(|p| p.frequency >= MIN_PATTERN_FREQUENCY)
        .collect();
    qualified.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    qualified.truncate(limit);
    qualified
}
