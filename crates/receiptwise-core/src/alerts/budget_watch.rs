//! Budget-overage rule
//!
//! Compares per-category spend against configured limits. A category past
//! its limit reports the overage amount; a category past the near-limit
//! ratio gets a heads-up warning. One alert per configured category at most.

use super::engine::{AlertRule, EvalContext, RuleConfig};
use super::types::{Alert, AlertKind};

pub struct BudgetWatchRule {
    near_limit_ratio: f64,
}

impl BudgetWatchRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            near_limit_ratio: config.near_limit_ratio,
        }
    }
}

impl AlertRule for BudgetWatchRule {
    fn kind(&self) -> AlertKind {
        AlertKind::BudgetOverage
    }

    fn name(&self) -> &'static str {
        "Budget Overage"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        let Some(budgets) = ctx.budgets else {
            return vec![];
        };

        let mut alerts = vec![];

        for (category, limit) in budgets.iter() {
            let spent: f64 = ctx
                .receipts
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.total_amount)
                .sum();

            if spent > limit {
                alerts.push(Alert::new(
                    AlertKind::BudgetOverage,
                    format!("budget-{}", category),
                    format!("{} Budget Exceeded", category),
                    format!(
                        "You've spent \u{20b9}{:.2} on {}, exceeding your \u{20b9}{:.2} \
                         budget by \u{20b9}{:.2}.",
                        spent,
                        category,
                        limit,
                        spent - limit
                    ),
                ));
            } else if spent > limit * self.near_limit_ratio {
                alerts.push(Alert::new(
                    AlertKind::BudgetOverage,
                    format!("budget-{}", category),
                    format!("{} Budget Almost Used Up", category),
                    format!(
                        "You've spent \u{20b9}{:.2} of your \u{20b9}{:.2} {} budget. \
                         Slow down to stay on track.",
                        spent, limit, category
                    ),
                ));
            }
        }

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetBook;
    use crate::models::Receipt;
    use chrono::NaiveDate;

    fn rule() -> BudgetWatchRule {
        BudgetWatchRule::new(&RuleConfig::default())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 25).unwrap()
    }

    fn dining_book(limit: f64) -> BudgetBook {
        let mut book = BudgetBook::new();
        book.set("Dining", limit).unwrap();
        book
    }

    #[test]
    fn test_no_budgets_no_alerts() {
        let receipts = vec![Receipt::new("1", "2024-07-20", "Cafe X", 9000.0, "Dining")];
        let rule = rule();
        assert!(rule.evaluate(&EvalContext::new(&receipts, today())).is_empty());
    }

    #[test]
    fn test_near_limit_warning() {
        // 4200 of 5000 is 84%: past the 80% ratio but not over.
        let receipts = vec![Receipt::new("1", "2024-07-20", "Cafe X", 4200.0, "Dining")];
        let book = dining_book(5000.0);

        let alerts = rule().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&book));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "budget-Dining");
        assert!(alerts[0].title.contains("Almost Used Up"));
    }

    #[test]
    fn test_over_budget_reports_overage() {
        let receipts = vec![
            Receipt::new("1", "2024-07-20", "Cafe X", 3000.0, "Dining"),
            Receipt::new("2", "2024-07-21", "Tea House", 2200.0, "Dining"),
        ];
        let book = dining_book(5000.0);

        let alerts = rule().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&book));
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].title.contains("Exceeded"));
        assert!(alerts[0].description.contains("\u{20b9}200.00"));
    }

    #[test]
    fn test_comfortable_spend_is_silent() {
        let receipts = vec![Receipt::new("1", "2024-07-20", "Cafe X", 1000.0, "Dining")];
        let book = dining_book(5000.0);
        let alerts = rule().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&book));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_unbudgeted_category_is_silent() {
        let receipts = vec![Receipt::new("1", "2024-07-20", "City Gas", 99999.0, "Travel")];
        let book = dining_book(5000.0);
        let alerts = rule().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&book));
        assert!(alerts.is_empty());
    }
}
