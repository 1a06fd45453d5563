//! Replykit demo binary
//!
//! Reads pasted comment text from stdin, parses it, and prints the numbered
//! preview. Pass a path to a recurring-author registry JSON file as the
//! first argument to enable recurring-author matching.

use std::io::Read;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use replykit::model::RecurringAuthor;
use replykit::parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry: Vec<RecurringAuthor> = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let comments = parser::parse(&text, &registry);
    if comments.is_empty() {
        if !text.trim().is_empty() {
            println!("コメントを認識できませんでした。入力フォーマットを確認してください。");
        }
        return Ok(());
    }

    println!("{}", parser::preview_text(&comments));
    Ok(())
}
