//! Loyalty reminder
//!
//! Informational nudge: when the wallet shows retail or grocery activity,
//! suggest checking loyalty programs for those stores. At most one alert.

use crate::models::Category;

use super::engine::{AlertRule, EvalContext};
use super::types::{Alert, AlertKind};

pub struct LoyaltyRule;

impl LoyaltyRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoyaltyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertRule for LoyaltyRule {
    fn kind(&self) -> AlertKind {
        AlertKind::LoyaltyReminder
    }

    fn name(&self) -> &'static str {
        "Loyalty Reminder"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        let qualifies = ctx.receipts.iter().any(|r| {
            !r.is_fraudulent
                && matches!(
                    Category::parse(&r.category),
                    Category::Shopping | Category::Groceries
                )
        });

        if !qualifies {
            return vec![];
        }

        vec![Alert::new(
            AlertKind::LoyaltyReminder,
            "loyalty-reminder",
            "Loyalty Points Reminder",
            "You've been shopping recently. Check whether your regular stores \
             offer loyalty points or cashback before your next visit.",
        )]
    }
}
