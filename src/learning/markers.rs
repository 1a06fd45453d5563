//! Static marker tables for edit analysis
//!
//! Fixed phrase-pair and tone-marker tables checked by the detectors.
//! Constant lists, never rebuilt per call.

/// Bidirectional common-phrase replacement pairs: (original, preferred)
///
/// Greeting politeness variants and honorific-suffix variants. Each
/// direction is listed separately so either edit direction is detected.
pub(super) const PHRASE_PAIRS: &[(&str, &str)] = &[
    ("ありがとうございます", "ありがとう"),
    ("ありがとう", "ありがとうございます"),
    ("よろしくお願いします", "よろしくね"),
    ("よろしくね", "よろしくお願いします"),
    ("さん", "ちゃん"),
    ("ちゃん", "さん"),
    ("くん", "さん"),
];

/// Polite sentence-ending forms
pub(super) const FORMAL_MARKERS: &[&str] = &["です", "ます", "ございます", "いたします"];

/// Casual sentence-ending forms
pub(super) const CASUAL_MARKERS: &[&str] = &["だよ", "だね", "よね", "するね"];

/// Tone labels used in tone-adjustment change records
pub(super) const TONE_FORMAL: &str = "敬語調";
pub(super) const TONE_CASUAL: &str = "カジュアル調";

/// Whether a character falls in the emoji code-point ranges the
/// emoji-change detector looks at
pub(super) fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F9FF}' | '\u{2600}'..='\u{26FF}' | '\u{2700}'..='\u{27BF}')
}
