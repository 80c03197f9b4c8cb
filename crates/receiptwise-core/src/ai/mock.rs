//! Mock advisor for testing
//!
//! Returns deterministic answers derived from the receipt collection, so
//! tests and development need no running LLM server.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::analytics::SpendingSummary;
use crate::error::{Error, Result};
use crate::models::{Category, Receipt};

use super::{Advisor, FinancialTip, TipKind};

/// Mock advisor backend
#[derive(Clone, Default)]
pub struct MockAdvisor {
    /// Whether calls should succeed
    pub healthy: bool,
}

impl MockAdvisor {
    /// Create a new mock advisor (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create a mock advisor whose calls fail, for degradation tests
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl Advisor for MockAdvisor {
    async fn query(
        &self,
        _question: &str,
        receipts: &[Receipt],
        _today: NaiveDate,
    ) -> Result<String> {
        if !self.healthy {
            return Err(Error::Advisor("mock advisor is offline".into()));
        }

        if receipts.is_empty() {
            return Ok("You have no receipts yet. Add one to get started!".into());
        }

        let summary = SpendingSummary::from_receipts(receipts);
        let top = summary
            .by_category
            .first()
            .map(|c| c.category.clone())
            .unwrap_or_else(|| "Other".into());

        Ok(format!(
            "You have {} receipts totalling \u{20b9}{:.2}. Your biggest category is {}.",
            summary.receipt_count, summary.total_spent, top
        ))
    }

    async fn tips(&self, receipts: &[Receipt]) -> Result<Vec<FinancialTip>> {
        if !self.healthy {
            return Err(Error::Advisor("mock advisor is offline".into()));
        }

        let mut tips = vec![];

        // Repeat vendor: suggest a reorder reminder.
        let mut seen: Vec<&str> = Vec::new();
        for receipt in receipts {
            if seen.contains(&receipt.vendor.as_str()) {
                tips.push(FinancialTip {
                    kind: TipKind::Reorder,
                    title: "Set a reorder reminder".into(),
                    description: format!(
                        "You buy from {} regularly. A reorder reminder could save you a trip.",
                        receipt.vendor
                    ),
                });
                break;
            }
            seen.push(receipt.vendor.as_str());
        }

        // Heavy dining: suggest cooking at home.
        let summary = SpendingSummary::from_receipts(receipts);
        if summary
            .by_category
            .first()
            .map(|c| Category::parse(&c.category) == Category::Dining)
            .unwrap_or(false)
        {
            tips.push(FinancialTip {
                kind: TipKind::SavingsTip,
                title: "Cook at home more often".into(),
                description: "Dining is your top spending category. A couple of home-cooked \
                              meals a week adds up."
                    .into(),
            });
        }

        // Any shopping: suggest comparing brands.
        if receipts
            .iter()
            .any(|r| Category::parse(&r.category) == Category::Shopping)
        {
            tips.push(FinancialTip {
                kind: TipKind::Alternative,
                title: "Compare store brands".into(),
                description: "Generic alternatives for brand-name items are often 20-30% \
                              cheaper for the same quality."
                    .into(),
            });
        }

        tips.truncate(3);
        Ok(tips)
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}
