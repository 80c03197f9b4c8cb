//! Budgets and per-category progress tracking

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::Receipt;

/// Default seed limits for common categories (rupees)
pub const DEFAULT_BUDGETS: [(&str, f64); 5] = [
    ("Groceries", 8000.0),
    ("Dining", 4000.0),
    ("Shopping", 5000.0),
    ("Travel", 3000.0),
    ("Utilities", 2000.0),
];

/// User-configured per-category spending limits.
///
/// Caller-owned mutable state. Iteration follows insertion order so that
/// progress output and budget alerts are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetBook {
    entries: Vec<(String, f64)>,
}

impl BudgetBook {
    /// Empty book with no limits configured
    pub fn new() -> Self {
        Self::default()
    }

    /// Book seeded with the default limits
    pub fn with_defaults() -> Self {
        let mut book = Self::new();
        for (category, limit) in DEFAULT_BUDGETS {
            book.entries.push((category.to_string(), limit));
        }
        book
    }

    /// Set or replace the limit for a category.
    ///
    /// Limits must be finite and non-negative; anything else is rejected
    /// the way the dashboard rejects bad form input.
    pub fn set(&mut self, category: &str, limit: f64) -> Result<()> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(Error::InvalidData(format!(
                "budget for {} must be a non-negative number",
                category
            )));
        }
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some(entry) => entry.1 = limit,
            None => self.entries.push((category.to_string(), limit)),
        }
        Ok(())
    }

    /// Remove a category's limit. Returns whether one was configured.
    pub fn remove(&mut self, category: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(c, _)| c != category);
        self.entries.len() != before
    }

    /// Configured limit for a category, if any
    pub fn limit(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, limit)| *limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(category, limit)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(c, l)| (c.as_str(), *l))
    }
}

/// Per-category budget progress, derived from receipts and limits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: f64,
    /// `None` means "no budget set" for a category that still has spend
    pub limit: Option<f64>,
    /// Percentage of the limit used; 0 when no (or zero) limit is set
    pub percentage: f64,
    pub is_over_budget: bool,
}

/// Derive progress for the union of budgeted and spent categories.
///
/// Budgeted categories come first in book order, then spend-only
/// categories in first-encounter order. Pure re-derivation: lowering a
/// limit below recorded spend flips `is_over_budget` on the next call.
pub fn budget_progress(receipts: &[Receipt], budgets: &BudgetBook) -> Vec<BudgetProgress> {
    // Spend per category in first-encounter order.
    let mut spending: Vec<(&str, f64)> = Vec::new();
    for receipt in receipts {
        match spending
            .iter_mut()
            .find(|(c, _)| *c == receipt.category.as_str())
        {
            Some(entry) => entry.1 += receipt.total_amount,
            None => spending.push((receipt.category.as_str(), receipt.total_amount)),
        }
    }

    let mut progress = vec![];

    for (category, limit) in budgets.iter() {
        let spent = spending
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
            .unwrap_or(0.0);
        progress.push(BudgetProgress {
            category: category.to_string(),
            spent,
            limit: Some(limit),
            percentage: if limit > 0.0 { spent / limit * 100.0 } else { 0.0 },
            is_over_budget: spent > limit,
        });
    }

    for &(category, spent) in &spending {
        if budgets.limit(category).is_some() {
            continue;
        }
        progress.push(BudgetProgress {
            category: category.to_string(),
            spent,
            limit: None,
            percentage: 0.0,
            is_over_budget: false,
        });
    }

    progress
}
