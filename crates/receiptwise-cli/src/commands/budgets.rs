//! Budget progress command

use std::path::Path;

use anyhow::{Context, Result};
use receiptwise_core::{budget_progress, load_budgets, BudgetBook};

use super::{load_scoped_receipts, WalletOpts};

pub fn cmd_budgets(opts: &WalletOpts, budgets_path: Option<&Path>) -> Result<()> {
    let receipts = load_scoped_receipts(opts)?;

    let budgets = match budgets_path {
        Some(path) => load_budgets(path)
            .with_context(|| format!("failed to load budgets from {}", path.display()))?,
        None => BudgetBook::with_defaults(),
    };

    let progress = budget_progress(&receipts, &budgets);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!();
    println!("🎯 Expense Budgets");
    println!("   ─────────────────────────────────────────────────────────────");

    if progress.is_empty() {
        println!("   No spending or budgets yet. Add a receipt or set a budget.");
        return Ok(());
    }

    for entry in &progress {
        match entry.limit {
            Some(limit) => {
                let marker = if entry.is_over_budget {
                    "❌"
                } else if entry.percentage > 75.0 {
                    "⚠️ "
                } else {
                    "✅"
                };
                println!(
                    "   {} {:<14} ₹{:>10.2} / ₹{:.2} ({:.0}%)",
                    marker, entry.category, entry.spent, limit, entry.percentage
                );
                if entry.is_over_budget {
                    println!(
                        "      Over budget by ₹{:.2}",
                        entry.spent - limit
                    );
                }
            }
            None => {
                println!(
                    "   ·  {:<14} ₹{:>10.2} / no budget set",
                    entry.category, entry.spent
                );
            }
        }
    }

    Ok(())
}
