//! Spending summary command

use anyhow::Result;
use receiptwise_core::{Category, SpendingSummary};

use super::{load_scoped_receipts, WalletOpts};

pub fn cmd_summary(opts: &WalletOpts) -> Result<()> {
    let receipts = load_scoped_receipts(opts)?;
    let summary = SpendingSummary::from_receipts(&receipts);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Receipts: {}", summary.receipt_count);
    println!("   Total spent: ₹{:.2}", summary.total_spent);
    println!("   Average receipt: ₹{:.2}", summary.average_spend);

    if summary.by_category.is_empty() {
        println!();
        println!("   No data to analyze yet. Add some receipts!");
        return Ok(());
    }

    println!();
    println!("   Top categories:");
    for entry in &summary.by_category {
        println!(
            "   [{:<13}] {:<14} ₹{:>10.2}  ({:.0}%)",
            Category::parse(&entry.category).icon(),
            entry.category,
            entry.amount,
            entry.share * 100.0
        );
    }

    Ok(())
}
