//! Spending analytics aggregation
//!
//! Produces the per-category breakdown behind the analytics view: total
//! spend, average spend, and category shares sorted largest-first.

use serde::Serialize;

use crate::models::Receipt;

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: f64,
    /// Fraction of total spend in [0,1]; 0 when there is no spend at all
    pub share: f64,
}

/// Aggregated view of a receipt collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    pub receipt_count: usize,
    pub total_spent: f64,
    /// Mean receipt total; 0 for an empty collection
    pub average_spend: f64,
    /// Per-category totals, sorted by amount descending
    pub by_category: Vec<CategorySpend>,
}

impl SpendingSummary {
    /// Aggregate a receipt collection.
    ///
    /// Receipts with an empty category are grouped under `Other`, matching
    /// the wallet view. Fraudulent receipts still count: they are real
    /// charges until disputed.
    pub fn from_receipts(receipts: &[Receipt]) -> Self {
        let total_spent: f64 = receipts.iter().map(|r| r.total_amount).sum();
        let average_spend = if receipts.is_empty() {
            0.0
        } else {
            total_spent / receipts.len() as f64
        };

        // Group in first-encounter order, then sort by amount. The stable
        // sort keeps first-encounter order for equal amounts.
        let mut totals: Vec<(&str, f64)> = Vec::new();
        for receipt in receipts {
            let key = if receipt.category.is_empty() {
                "Other"
            } else {
                receipt.category.as_str()
            };
            match totals.iter_mut().find(|(c, _)| *c == key) {
                Some(entry) => entry.1 += receipt.total_amount,
                None => totals.push((key, receipt.total_amount)),
            }
        }
        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let by_category = totals
            .into_iter()
            .map(|(category, amount)| CategorySpend {
                category: category.to_string(),
                amount,
                share: if total_spent > 0.0 {
                    amount / total_spent
                } else {
                    0.0
                },
            })
            .collect();

        Self {
            receipt_count: receipts.len(),
            total_spent,
            average_spend,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Receipt;

    #[test]
    fn test_empty_collection() {
        let summary = SpendingSummary::from_receipts(&[]);
        assert_eq!(summary.receipt_count, 0);
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.average_spend, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let receipts = vec![
            Receipt::new("1", "2024-07-20", "Cafe X", 1000.0, "Dining"),
            Receipt::new("2", "2024-07-21", "Fresh Mart", 6000.0, "Groceries"),
            Receipt::new("3", "2024-07-22", "Tea House", 500.0, "Dining"),
        ];

        let summary = SpendingSummary::from_receipts(&receipts);
        assert_eq!(summary.total_spent, 7500.0);
        assert_eq!(summary.average_spend, 2500.0);

        let names: Vec<&str> = summary
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["Groceries", "Dining"]);
        assert_eq!(summary.by_category[0].amount, 6000.0);
        assert!((summary.by_category[0].share - 0.8).abs() < 1e-9);
        assert_eq!(summary.by_category[1].amount, 1500.0);
    }

    #[test]
    fn test_empty_category_grouped_as_other() {
        let receipts = vec![Receipt::new("1", "2024-07-20", "Mystery Shop", 100.0, "")];
        let summary = SpendingSummary::from_receipts(&receipts);
        assert_eq!(summary.by_category[0].category, "Other");
    }

    #[test]
    fn test_zero_total_has_zero_shares() {
        let receipts = vec![Receipt::new("1", "2024-07-20", "Freebie Fair", 0.0, "Other")];
        let summary = SpendingSummary::from_receipts(&receipts);
        assert_eq!(summary.by_category[0].share, 0.0);
    }
}
