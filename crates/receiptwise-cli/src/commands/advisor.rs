//! AI advisor commands (ask, tips)
//!
//! Advisor output is advisory only: failures and missing configuration
//! degrade to a generic message or an empty tip list, never a hard error.

use anyhow::Result;
use receiptwise_core::ai::{query_or_fallback, tips_or_empty, FALLBACK_ANSWER};
use receiptwise_core::OllamaAdvisor;

use super::{load_scoped_receipts, WalletOpts};

pub async fn cmd_ask(opts: &WalletOpts, question: &str) -> Result<()> {
    let receipts = load_scoped_receipts(opts)?;
    let today = chrono::Local::now().date_naive();

    let answer = match OllamaAdvisor::from_env() {
        Some(advisor) => query_or_fallback(&advisor, question, &receipts, today).await,
        None => {
            tracing::warn!("OLLAMA_HOST not set; advisor unavailable");
            FALLBACK_ANSWER.to_string()
        }
    };

    if opts.json {
        println!("{}", serde_json::json!({ "answer": answer }));
        return Ok(());
    }

    println!();
    println!("🤖 {}", answer);
    Ok(())
}

pub async fn cmd_tips(opts: &WalletOpts) -> Result<()> {
    let receipts = load_scoped_receipts(opts)?;

    let tips = match OllamaAdvisor::from_env() {
        Some(advisor) => tips_or_empty(&advisor, &receipts).await,
        None => {
            tracing::warn!("OLLAMA_HOST not set; advisor unavailable");
            vec![]
        }
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&tips)?);
        return Ok(());
    }

    println!();
    println!("💡 Financial Tips");
    println!("   ─────────────────────────────────────────────────────────────");

    if tips.is_empty() {
        println!("   No tips right now. Check back after adding more receipts.");
        return Ok(());
    }

    for tip in &tips {
        println!("   • {} [{}]", tip.title, tip.kind.as_str());
        println!("     {}", tip.description);
    }

    Ok(())
}
