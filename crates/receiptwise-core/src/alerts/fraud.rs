//! Fraud rule
//!
//! Summarizes receipts flagged by the upstream fraud classifier. Emits a
//! single alert with the count rather than one alert per receipt; the
//! wallet view already highlights the individual records.

use super::engine::{AlertRule, EvalContext};
use super::types::{Alert, AlertKind};

pub struct FraudRule;

impl FraudRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FraudRule {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertRule for FraudRule {
    fn kind(&self) -> AlertKind {
        AlertKind::Fraud
    }

    fn name(&self) -> &'static str {
        "Potential Fraud"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        let count = ctx.receipts.iter().filter(|r| r.is_fraudulent).count();
        if count == 0 {
            return vec![];
        }

        vec![Alert::new(
            AlertKind::Fraud,
            "fraud-alert",
            "Potential Fraud Detected",
            format!(
                "We found {} receipt(s) that might be fraudulent. Please review them carefully.",
                count
            ),
        )]
    }
}
