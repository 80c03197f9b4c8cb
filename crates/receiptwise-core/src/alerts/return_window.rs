//! Return-window rule
//!
//! High-value purchases are assumed returnable for a fixed number of days.
//! When the remaining window for a purchase drops to a week or less, each
//! qualifying receipt gets its own countdown reminder.

use super::engine::{AlertRule, EvalContext, RuleConfig};
use super::types::{Alert, AlertKind};

pub struct ReturnWindowRule {
    high_spend_threshold: f64,
    window_days: i64,
    closing_soon_days: i64,
}

impl ReturnWindowRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            high_spend_threshold: config.high_spend_threshold,
            window_days: config.return_window_days,
            closing_soon_days: config.closing_soon_days,
        }
    }
}

impl AlertRule for ReturnWindowRule {
    fn kind(&self) -> AlertKind {
        AlertKind::ReturnWindow
    }

    fn name(&self) -> &'static str {
        "Return Window"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        let mut alerts = vec![];

        for receipt in ctx
            .receipts
            .iter()
            .filter(|r| !r.is_fraudulent && r.total_amount > self.high_spend_threshold)
        {
            // Malformed date: the rule silently skips this receipt.
            let Some(purchased) = receipt.purchase_date() else {
                continue;
            };

            let days_since = (ctx.today - purchased).num_days();
            let remaining = self.window_days - days_since;

            if remaining > 0 && remaining <= self.closing_soon_days {
                alerts.push(Alert::new(
                    AlertKind::ReturnWindow,
                    format!("return-{}", receipt.id),
                    "Return Window Closing!",
                    format!(
                        "Only {} days left to return your \u{20b9}{:.2} purchase from {}.",
                        remaining, receipt.total_amount, receipt.vendor
                    ),
                ));
            }
        }

        alerts
    }
}
