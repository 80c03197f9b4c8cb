//! Recurring-vendor rule
//!
//! Counts non-fraudulent receipts per vendor (exact, case-sensitive match)
//! and surfaces the single most frequent vendor once it crosses the
//! frequency threshold. Only the top vendor is reported; ties go to the
//! vendor encountered first in the collection.

use super::engine::{AlertRule, EvalContext, RuleConfig};
use super::types::{Alert, AlertKind};

pub struct RecurringVendorRule {
    frequency_threshold: usize,
}

impl RecurringVendorRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            frequency_threshold: config.frequent_vendor_threshold,
        }
    }
}

impl AlertRule for RecurringVendorRule {
    fn kind(&self) -> AlertKind {
        AlertKind::RecurringVendor
    }

    fn name(&self) -> &'static str {
        "Recurring Vendor"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        // Count in first-encounter order so tie-breaking is deterministic.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for receipt in ctx.receipts.iter().filter(|r| !r.is_fraudulent) {
            match counts
                .iter_mut()
                .find(|(vendor, _)| *vendor == receipt.vendor.as_str())
            {
                Some(entry) => entry.1 += 1,
                None => counts.push((receipt.vendor.as_str(), 1)),
            }
        }

        let mut top: Option<(&str, usize)> = None;
        for &(vendor, count) in &counts {
            if count < self.frequency_threshold {
                continue;
            }
            match top {
                // Strictly-greater keeps the first-encountered vendor on ties.
                Some((_, best)) if count <= best => {}
                _ => top = Some((vendor, count)),
            }
        }

        let Some((vendor, count)) = top else {
            return vec![];
        };

        vec![Alert::new(
            AlertKind::RecurringVendor,
            "recurring-payment-alert",
            "Recurring Payment Detected",
            format!(
                "You've shopped at {} {} times recently. This might be a subscription.",
                vendor, count
            ),
        )]
    }
}
