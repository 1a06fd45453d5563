//! Prompt construction for the generation service
//!
//! Assembles the system and user prompts sent to the external
//! text-generation service: account style settings, persona, learned
//! editing preferences, recurring-author context, and the numbered comment
//! list. The output-format instruction matches what
//! [`crate::parser::parse_generated_replies`] expects back.

use crate::model::{Account, Comment, LearnedPattern};
use crate::parser::preview_text;

/// The system and user halves of a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    pub system: String,
    pub user: String,
}

/// Build the prompt pair for a batch of parsed comments
pub fn build_prompt(
    comments: &[Comment],
    account: &Account,
    patterns: &[&LearnedPattern],
) -> PromptParts {
    PromptParts {
        system: build_system_prompt(account, patterns),
        user: build_user_prompt(comments),
    }
}

fn build_system_prompt(account: &Account, patterns: &[&LearnedPattern]) -> String {
    let persona = if account.persona.is_empty() {
        "特に指定なし（自然体で対応）"
    } else {
        &account.persona
    };

    let additional = if account.additional_instructions.is_empty() {
        String::new()
    } else {
        format!("【追加指示】\n{}\n", account.additional_instructions)
    };

    let learning = build_learning_context(patterns);
    let learning = if learning.is_empty() {
        String::new()
    } else {
        format!("【過去の編集から学習した好み】\n{learning}\n")
    };

    format!(
        "あなたはSNSアカウントの運営者として、フォロワーからのリプライに返信を作成します。

【アカウント設定】
- 一人称: {first_person}
- 口調: {tone}
- 絵文字: {emoji}
- 返信の長さ: {length}

【キャラクター詳細】
{persona}

{additional}{learning}【返信ルール】
- 必ず相手の名前で呼びかける（「〇〇さん」「〇〇くん」「〇〇ちゃん」など、キャラに合わせて）
- 相手の文章量より必ず多く返す（相手が短文でも、こちらは丁寧に長めに返す）
- 相手のことを思いやり、心に刺さる言葉を入れる（承認、共感、励まし、特別感）
- 相手の状況や気持ちを想像して、一歩踏み込んだ返信をする
- 質問には具体的に答える
- 常連ユーザーには過去のやり取りを踏まえた特別感を出す
- 絵文字は設定に従って使用

【出力形式】
各返信は以下の形式で出力してください（区切り線で分離）：

@ユーザー名
返信文

---

@次のユーザー名
返信文

---",
        first_person = account.first_person,
        tone = account.tone,
        emoji = account.emoji_level.instruction(),
        length = account.reply_length.instruction(),
    )
}

/// Render learned preferences as instruction lines
///
/// Entries with an empty side are skipped.
fn build_learning_context(patterns: &[&LearnedPattern]) -> String {
    patterns
        .iter()
        .filter(|p| !p.original_fragment.is_empty() && !p.replacement_fragment.is_empty())
        .map(|p| {
            format!(
                "- 「{}」より「{}」を使う",
                p.original_fragment, p.replacement_fragment
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_user_prompt(comments: &[Comment]) -> String {
    let recurring = build_recurring_info(comments);
    let recurring = if recurring.is_empty() {
        String::new()
    } else {
        format!("【常連ユーザー情報】\n{recurring}\n")
    };

    format!(
        "以下のコメントに返信を作成してください。\n\n{recurring}【コメント一覧】\n{list}",
        list = preview_text(comments),
    )
}

/// Auxiliary context block for comments whose author matched the registry
///
/// Only set fields are rendered; an interaction count of zero is omitted.
fn build_recurring_info(comments: &[Comment]) -> String {
    comments
        .iter()
        .filter_map(|c| c.recurring_author.as_ref())
        .map(|author| {
            let mut parts = vec![format!("@{}", author.handle)];
            if !author.nickname.is_empty() {
                parts.push(format!("（内部呼称: {}）", author.nickname));
            }
            if !author.relationship.is_empty() {
                parts.push(format!("関係性: {}", author.relationship));
            }
            if !author.characteristics.is_empty() {
                parts.push(format!("特徴: {}", author.characteristics));
            }
            if !author.preferred_response.is_empty() {
                parts.push(format!("対応方針: {}", author.preferred_response));
            }
            if author.interaction_count > 0 {
                parts.push(format!("過去のやり取り: {}回", author.interaction_count));
            }
            parts.join("\n  ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Change, EmojiLevel, PatternKind, Platform, RecurringAuthor, ReplyLength,
    };
    use chrono::Utc;

    fn sample_account() -> Account {
        Account {
            id: "acc1".to_string(),
            name: "テストアカウント".to_string(),
            platform: Platform::X,
            persona: String::new(),
            first_person: "私".to_string(),
            tone: "フレンドリー".to_string(),
            emoji_level: EmojiLevel::Low,
            reply_length: ReplyLength::Medium,
            additional_instructions: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_pattern() -> LearnedPattern {
        LearnedPattern::from_change(
            "acc1",
            &Change {
                kind: PatternKind::PhraseReplacement,
                original_fragment: "ありがとうございます".to_string(),
                replacement_fragment: "ありがとう".to_string(),
            },
        )
    }

    #[test]
    fn test_system_prompt_contains_account_settings() {
        let prompt = build_prompt(&[], &sample_account(), &[]);

        assert!(prompt.system.contains("- 一人称: 私"));
        assert!(prompt.system.contains("- 口調: フレンドリー"));
        assert!(prompt.system.contains(EmojiLevel::Low.instruction()));
        assert!(prompt.system.contains(ReplyLength::Medium.instruction()));
    }

    #[test]
    fn test_system_prompt_persona_fallback() {
        let prompt = build_prompt(&[], &sample_account(), &[]);
        assert!(prompt.system.contains("特に指定なし（自然体で対応）"));

        let account = Account {
            persona: "明るい20代カフェ店員".to_string(),
            ..sample_account()
        };
        let prompt = build_prompt(&[], &account, &[]);
        assert!(prompt.system.contains("明るい20代カフェ店員"));
        assert!(!prompt.system.contains("特に指定なし"));
    }

    #[test]
    fn test_system_prompt_additional_instructions_block() {
        let prompt = build_prompt(&[], &sample_account(), &[]);
        assert!(!prompt.system.contains("【追加指示】"));

        let account = Account {
            additional_instructions: "絶対に政治の話はしない".to_string(),
            ..sample_account()
        };
        let prompt = build_prompt(&[], &account, &[]);
        assert!(prompt.system.contains("【追加指示】"));
        assert!(prompt.system.contains("絶対に政治の話はしない"));
    }

    #[test]
    fn test_system_prompt_learning_block() {
        let prompt = build_prompt(&[], &sample_account(), &[]);
        assert!(!prompt.system.contains("【過去の編集から学習した好み】"));

        let pattern = sample_pattern();
        let prompt = build_prompt(&[], &sample_account(), &[&pattern]);
        assert!(prompt.system.contains("【過去の編集から学習した好み】"));
        assert!(
            prompt
                .system
                .contains("- 「ありがとうございます」より「ありがとう」を使う")
        );
    }

    #[test]
    fn test_system_prompt_ends_with_output_format() {
        let prompt = build_prompt(&[], &sample_account(), &[]);
        assert!(prompt.system.contains("【出力形式】"));
        assert!(prompt.system.ends_with("---"));
    }

    #[test]
    fn test_user_prompt_numbered_comment_list() {
        let comments = vec![Comment::new("alice", "hello"), Comment::new("bob", "hi")];
        let prompt = build_prompt(&comments, &sample_account(), &[]);

        assert!(prompt.user.contains("【コメント一覧】"));
        assert!(prompt.user.contains("1. @alice: hello"));
        assert!(prompt.user.contains("2. @bob: hi"));
        assert!(!prompt.user.contains("【常連ユーザー情報】"));
    }

    #[test]
    fn test_user_prompt_recurring_author_block() {
        let author = RecurringAuthor {
            id: "a1".to_string(),
            handle: "tanaka_taro".to_string(),
            platform: Platform::X,
            nickname: "たなちゃん".to_string(),
            relationship: "初期からのフォロワー".to_string(),
            characteristics: String::new(),
            preferred_response: String::new(),
            interaction_count: 12,
            last_interaction: None,
            notes: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let comment = Comment {
            handle: "tanaka_taro".to_string(),
            body: "こんにちは".to_string(),
            recurring_author: Some(author),
        };
        let prompt = build_prompt(&[comment], &sample_account(), &[]);

        assert!(prompt.user.contains("【常連ユーザー情報】"));
        assert!(prompt.user.contains("@tanaka_taro"));
        assert!(prompt.user.contains("（内部呼称: たなちゃん）"));
        assert!(prompt.user.contains("関係性: 初期からのフォロワー"));
        assert!(prompt.user.contains("過去のやり取り: 12回"));
        // Unset fields are omitted
        assert!(!prompt.user.contains("特徴:"));
        assert!(!prompt.user.contains("対応方針:"));
    }

    #[test]
    fn test_learning_context_skips_empty_fragments() {
        let mut pattern = sample_pattern();
        pattern.original_fragment = String::new();

        assert_eq!(build_learning_context(&[&pattern]), "");
    }

    #[test]
    fn test_user_prompt_snapshot() {
        let comments = vec![Comment::new("alice", "hello")];
        let prompt = build_prompt(&comments, &sample_account(), &[]);
        insta::assert_snapshot!(prompt.user, @r"
        以下のコメントに返信を作成してください。

        【コメント一覧】
        1. @alice: hello
        ");
    }
}
