//! Spending-spike rule
//!
//! Flags the first receipt whose total is a multiple of the average spend
//! across the whole collection. At most one alert per pass.

use super::engine::{AlertRule, EvalContext, RuleConfig};
use super::types::{Alert, AlertKind};

pub struct SpendingSpikeRule {
    spike_multiplier: f64,
}

impl SpendingSpikeRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            spike_multiplier: config.spike_multiplier,
        }
    }
}

impl AlertRule for SpendingSpikeRule {
    fn kind(&self) -> AlertKind {
        AlertKind::SpendingSpike
    }

    fn name(&self) -> &'static str {
        "Spending Spike"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        // Empty collection: no average to compare against.
        if ctx.receipts.is_empty() {
            return vec![];
        }

        let total: f64 = ctx.receipts.iter().map(|r| r.total_amount).sum();
        let average = total / ctx.receipts.len() as f64;

        let Some(spike) = ctx
            .receipts
            .iter()
            .find(|r| r.total_amount > average * self.spike_multiplier)
        else {
            return vec![];
        };

        vec![Alert::new(
            AlertKind::SpendingSpike,
            format!("spike-{}", spike.id),
            "Spending Spike",
            format!(
                "Your purchase of \u{20b9}{:.2} at {} is significantly higher than \
                 your average spend of \u{20b9}{:.2}.",
                spike.total_amount, spike.vendor, average
            ),
        )]
    }
}
