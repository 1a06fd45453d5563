//! Learning-flow integration tests.
//!
//! Walks the full feedback loop through the public API: analyze an edit,
//! merge the findings, select top patterns, and confirm they reach the next
//! prompt.

use chrono::Utc;
use replykit::learning::{self, DEFAULT_PATTERN_LIMIT};
use replykit::model::{Account, EmojiLevel, PatternKind, Platform, ReplyLength};
use replykit::parser;
use replykit::prompt;

fn account() -> Account {
    Account {
        id: "acc1".to_string(),
        name: "テスト".to_string(),
        platform: Platform::X,
        persona: String::new(),
        first_person: "私".to_string(),
        tone: "丁寧".to_string(),
        emoji_level: EmojiLevel::Medium,
        reply_length: ReplyLength::Short,
        additional_instructions: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_identical_edit_produces_no_patterns() {
    let analysis = learning::analyze("acc1", "同じ返信です", "同じ返信です");
    assert!(analysis.changes.is_empty());

    let table = learning::merge_patterns(Vec::new(), &analysis.changes, "acc1");
    assert!(table.is_empty());
}

#[test]
fn test_repeated_edit_reaches_prompt_after_two_observations() {
    let original = "ありがとうございます！";
    let edited = "ありがとう！";

    // First observation: pattern exists but frequency 1 keeps it out of prompts
    let analysis = learning::analyze("acc1", original, edited);
    assert!(!analysis.changes.is_empty());
    let table = learning::merge_patterns(Vec::new(), &analysis.changes, "acc1");
    assert!(learning::top_patterns(&table, DEFAULT_PATTERN_LIMIT).is_empty());

    // Second observation of the same edit
    let analysis = learning::analyze("acc1", original, edited);
    let table = learning::merge_patterns(table, &analysis.changes, "acc1");
    let top = learning::top_patterns(&table, DEFAULT_PATTERN_LIMIT);
    assert!(!top.is_empty());
    assert!(top.iter().all(|p| p.frequency >= 2));

    // The learned preference now shows up in the system prompt
    let comments = parser::parse("alice: hello", &[]);
    let parts = prompt::build_prompt(&comments, &account(), &top);
    assert!(parts.system.contains("【過去の編集から学習した好み】"));
    assert!(
        parts
            .system
            .contains("「ありがとうございます」より「ありがとう」を使う")
    );
}

#[test]
fn test_merge_twice_yields_single_entry_with_frequency_two() {
    let change = learning::analyze("acc1", "hello world friend", "hello there friend")
        .changes
        .remove(0);

    let table = learning::merge_patterns(Vec::new(), std::slice::from_ref(&change), "acc1");
    let table = learning::merge_patterns(table, std::slice::from_ref(&change), "acc1");

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].frequency, 2);
    assert_eq!(table[0].kind, PatternKind::PhraseReplacement);
}

#[test]
fn test_tables_from_different_accounts_stay_separate() {
    let change = learning::analyze("acc1", "hello world friend", "hello there friend")
        .changes
        .remove(0);

    let table = learning::merge_patterns(Vec::new(), std::slice::from_ref(&change), "acc1");
    let table = learning::merge_patterns(table, std::slice::from_ref(&change), "acc2");

    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|p| p.frequency == 1));
}

#[test]
fn test_length_boundaries_are_strict() {
    let length_records = |original: &str, edited: &str| {
        learning::analyze("acc1", original, edited)
            .changes
            .into_iter()
            .filter(|c| c.kind == PatternKind::LengthPreference)
            .count()
    };

    assert_eq!(length_records(&"a".repeat(100), &"a".repeat(70)), 0);
    assert_eq!(length_records(&"a".repeat(100), &"a".repeat(69)), 1);
    assert_eq!(length_records(&"a".repeat(100), &"a".repeat(130)), 0);
    assert_eq!(length_records(&"a".repeat(100), &"a".repeat(131)), 1);
}

#[test]
fn test_emoji_count_change_records() {
    let analysis = learning::analyze(
        "acc1",
        "今日も一日お疲れさまでした😀",
        "今日も一日お疲れさまでした😎✨🌟",
    );

    let emojis: Vec<_> = analysis
        .changes
        .iter()
        .filter(|c| c.kind == PatternKind::EmojiChange)
        .collect();

    // One count summary plus one substitution for the overlapping index
    assert_eq!(emojis.len(), 2);
    assert_eq!(emojis[0].original_fragment, "絵文字1個");
    assert_eq!(emojis[0].replacement_fragment, "絵文字3個");
    assert_eq!(emojis[1].original_fragment, "😀");
}
