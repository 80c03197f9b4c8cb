//! Smart alert command

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use receiptwise_core::{load_budgets, AlertEngine, BudgetBook, EvalContext, Severity};

use super::{load_scoped_receipts, WalletOpts};

pub fn cmd_alerts(
    opts: &WalletOpts,
    budgets_path: Option<&Path>,
    today_override: Option<&str>,
) -> Result<()> {
    let receipts = load_scoped_receipts(opts)?;

    let budgets: Option<BudgetBook> = budgets_path
        .map(|path| {
            load_budgets(path)
                .with_context(|| format!("failed to load budgets from {}", path.display()))
        })
        .transpose()?;

    let today = match today_override {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid --today date: {} (expected YYYY-MM-DD)", raw))?,
        None => chrono::Local::now().date_naive(),
    };

    let engine = AlertEngine::new();
    let mut ctx = EvalContext::new(&receipts, today);
    if let Some(ref book) = budgets {
        ctx = ctx.with_budgets(book);
    }
    let alerts = engine.evaluate(&ctx);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
        return Ok(());
    }

    println!();
    println!("🔔 Smart Reminders ({})", today.format("%Y-%m-%d"));
    println!("   ─────────────────────────────────────────────────────────────");

    if alerts.is_empty() {
        println!("   All clear! No urgent reminders right now.");
        return Ok(());
    }

    for alert in &alerts {
        let marker = match alert.severity {
            Severity::Alert => "🚨",
            Severity::Warning => "⚠️ ",
            Severity::Attention => "🔁",
            Severity::Info => "💡",
        };
        println!("   {} {}", marker, alert.title);
        println!("      {}", alert.description);
    }

    Ok(())
}
