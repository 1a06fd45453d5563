//! Edit-pattern detectors
//!
//! Four independent detectors run over the (original, edited) pair and their
//! findings are concatenated: phrase replacements, emoji changes, length
//! change, tone adjustment. Detectors never fail; unrecognized edits simply
//! produce no findings. Duplicates are not removed here - aggregation is the
//! merge step's job.

use crate::model::{Change, PatternKind};

use super::EditAnalysis;
use super::markers::{
    CASUAL_MARKERS, FORMAL_MARKERS, PHRASE_PAIRS, TONE_CASUAL, TONE_FORMAL, is_emoji,
};

/// Positional token comparison only runs when the token counts are within
/// this distance of each other
const TOKEN_COUNT_SLACK: usize = 2;

/// Tokens this short are too ambiguous for positional comparison
const MIN_TOKEN_CHARS: usize = 2;

/// Length-ratio thresholds (strict inequalities)
const SHORTER_RATIO: f64 = 0.7;
const LONGER_RATIO: f64 = 1.3;

/// Analyze how an edited reply diverges stylistically from the original
pub fn analyze(account_id: &str, original: &str, edited: &str) -> EditAnalysis {
    let mut changes = Vec::new();
    changes.extend(detect_phrase_replacements(original, edited));
    changes.extend(detect_emoji_changes(original, edited));
    changes.extend(detect_length_change(original, edited));
    changes.extend(detect_tone_adjustment(original, edited));

    tracing::debug!(account_id, count = changes.len(), "analyzed reply edit");

    EditAnalysis {
        account_id: account_id.to_string(),
        original_reply: original.to_string(),
        edited_reply: edited.to_string(),
        changes,
    }
}

/// Detect phrase replacements
///
/// Two passes: the fixed phrase-pair table (a pair fires when the original
/// contains one side, the edited text lost it and gained the other side),
/// then positional whitespace-token comparison when both texts tokenize to
/// roughly the same length.
fn detect_phrase_replacements(original: &str, edited: &str) -> Vec<Change> {
    let mut changes = Vec::new();

    for (from, to) in PHRASE_PAIRS {
        if original.contains(from) && !edited.contains(from) && edited.contains(to) {
            changes.push(Change {
                kind: PatternKind::PhraseReplacement,
                original_fragment: (*from).to_string(),
                replacement_fragment: (*to).to_string(),
            });
        }
    }

    let original_tokens: Vec<&str> = original.split_whitespace().collect();
    let edited_tokens: Vec<&str> = edited.split_whitespace().collect();

    if original_tokens.len().abs_diff(edited_tokens.len()) <= TOKEN_COUNT_SLACK {
        for (orig, edit) in original_tokens.iter().zip(&edited_tokens) {
            if orig != edit
                && orig.chars().count() > MIN_TOKEN_CHARS
                && edit.chars().count() > MIN_TOKEN_CHARS
            {
                changes.push(Change {
                    kind: PatternKind::PhraseReplacement,
                    original_fragment: (*orig).to_string(),
                    replacement_fragment: (*edit).to_string(),
                });
            }
        }
    }

    changes
}

/// Detect emoji changes
///
/// Emits one count-summary record when the totals differ, plus one
/// substitution record per overlapping position with differing glyphs.
fn detect_emoji_changes(original: &str, edited: &str) -> Vec<Change> {
    let original_emojis: Vec<char> = original.chars().filter(|c| is_emoji(*c)).collect();
    let edited_emojis: Vec<char> = edited.chars().filter(|c| is_emoji(*c)).collect();

    let mut changes = Vec::new();

    if original_emojis.len() != edited_emojis.len() {
        changes.push(Change {
            kind: PatternKind::EmojiChange,
            original_fragment: format!("絵文字{}個", original_emojis.len()),
            replacement_fragment: format!("絵文字{}個", edited_emojis.len()),
        });
    }

    for (orig, edit) in original_emojis.iter().zip(&edited_emojis) {
        if orig != edit {
            changes.push(Change {
                kind: PatternKind::EmojiChange,
                original_fragment: orig.to_string(),
                replacement_fragment: edit.to_string(),
            });
        }
    }

    changes
}

/// Detect a length preference
///
/// Character-count ratio edited/original; strictly below 0.7 means the
/// operator shortened, strictly above 1.3 means they lengthened. At most one
/// record. An empty pair yields a NaN ratio, which compares false both ways.
fn detect_length_change(original: &str, edited: &str) -> Option<Change> {
    let original_len = original.chars().count();
    let edited_len = edited.chars().count();
    let ratio = edited_len as f64 / original_len as f64;

    if ratio < SHORTER_RATIO {
        Some(Change {
            kind: PatternKind::LengthPreference,
            original_fragment: format!("{original_len}文字"),
            replacement_fragment: format!("{edited_len}文字（より短く）"),
        })
    } else if ratio > LONGER_RATIO {
        Some(Change {
            kind: PatternKind::LengthPreference,
            original_fragment: format!("{original_len}文字"),
            replacement_fragment: format!("{edited_len}文字（より長く）"),
        })
    } else {
        None
    }
}

/// Detect a tone adjustment
///
/// Counts how many markers of each fixed set are present in each text.
/// Formal presence strictly down and casual presence strictly up means the
/// edit went casual; the symmetric condition means it went formal. At most
/// one record.
fn detect_tone_adjustment(original: &str, edited: &str) -> Option<Change> {
    fn present(text: &str, markers: &[&str]) -> usize {
        markers.iter().filter(|&&m| text.contains(m)).count()
    }

    let original_formal = present(original, FORMAL_MARKERS);
    let edited_formal = present(edited, FORMAL_MARKERS);
    let original_casual = present(original, CASUAL_MARKERS);
    let edited_casual = present(edited, CASUAL_MARKERS);

    if original_formal > edited_formal && edited_casual > original_casual {
        Some(Change {
            kind: PatternKind::ToneAdjustment,
            original_fragment: TONE_FORMAL.to_string(),
            replacement_fragment: TONE_CASUAL.to_string(),
        })
    } else if edited_formal > original_formal && original_casual > edited_casual {
        Some(Change {
            kind: PatternKind::ToneAdjustment,
            original_fragment: TONE_CASUAL.to_string(),
            replacement_fragment: TONE_FORMAL.to_string(),
        })
    } else {
        None
    }
}
