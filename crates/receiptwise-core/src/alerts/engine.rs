//! Alert engine - orchestrates rule evaluation over a receipt collection

use chrono::NaiveDate;

use crate::budget::BudgetBook;
use crate::models::Receipt;

use super::budget_watch::BudgetWatchRule;
use super::fraud::FraudRule;
use super::loyalty::LoyaltyRule;
use super::recurring_vendor::RecurringVendorRule;
use super::return_window::ReturnWindowRule;
use super::spending_spike::SpendingSpikeRule;
use super::types::{Alert, AlertKind};

/// Thresholds for the built-in rules.
///
/// Caller-owned configuration, passed in explicitly - there is no ambient
/// global. Defaults match the dashboard's historical constants.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// A purchase above this amount counts as high-spend (rupees)
    pub high_spend_threshold: f64,
    /// Days after purchase during which a return is assumed possible
    pub return_window_days: i64,
    /// Remind only when this few days (or fewer) remain in the window
    pub closing_soon_days: i64,
    /// Visits to the same vendor before it counts as recurring
    pub frequent_vendor_threshold: usize,
    /// A purchase is a spike when it exceeds the average by this factor
    pub spike_multiplier: f64,
    /// Fraction of a budget limit that triggers a near-limit warning
    pub near_limit_ratio: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            high_spend_threshold: 2000.0,
            return_window_days: 30,
            closing_soon_days: 7,
            frequent_vendor_threshold: 3,
            spike_multiplier: 5.0,
            near_limit_ratio: 0.8,
        }
    }
}

/// Inputs for one evaluation pass.
///
/// `today` is supplied by the caller rather than read from a global clock,
/// which keeps the pass reproducible and testable with fixed dates.
pub struct EvalContext<'a> {
    /// Wallet-filtered receipt collection, fully materialized
    pub receipts: &'a [Receipt],
    /// Configured budgets; `None` disables the budget-overage rule
    pub budgets: Option<&'a BudgetBook>,
    /// Reference date for the return-window countdown
    pub today: NaiveDate,
}

impl<'a> EvalContext<'a> {
    pub fn new(receipts: &'a [Receipt], today: NaiveDate) -> Self {
        Self {
            receipts,
            budgets: None,
            today,
        }
    }

    pub fn with_budgets(mut self, budgets: &'a BudgetBook) -> Self {
        self.budgets = Some(budgets);
        self
    }
}

/// Trait for alert rules.
///
/// Rules are pure and synchronous: no I/O, no clock access, no mutation of
/// the receipt collection. Each contributes zero or more alerts.
pub trait AlertRule: Send + Sync {
    /// The alert kind this rule produces
    fn kind(&self) -> AlertKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule against the context
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert>;
}

/// The smart alert engine.
///
/// Rules run in registration order and their alerts are concatenated, so a
/// fixed input always produces the same alert sequence in the same order.
pub struct AlertEngine {
    rules: Vec<Box<dyn AlertRule>>,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEngine {
    /// Create an engine with the built-in rules and default thresholds
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    /// Create an engine with the built-in rules and custom thresholds
    pub fn with_config(config: RuleConfig) -> Self {
        let mut engine = Self { rules: vec![] };

        // Registration order is the output order.
        engine.register(Box::new(FraudRule::new()));
        engine.register(Box::new(ReturnWindowRule::new(&config)));
        engine.register(Box::new(RecurringVendorRule::new(&config)));
        engine.register(Box::new(SpendingSpikeRule::new(&config)));
        engine.register(Box::new(BudgetWatchRule::new(&config)));
        engine.register(Box::new(LoyaltyRule::new()));

        engine
    }

    /// Register an additional rule
    pub fn register(&mut self, rule: Box<dyn AlertRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and collect their alerts.
    ///
    /// Pure and idempotent: an empty collection yields an empty vector, and
    /// re-running with identical inputs yields an identical sequence.
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Alert> {
        let mut alerts = vec![];

        for rule in &self.rules {
            let produced = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.kind().as_str(),
                count = produced.len(),
                "Alert rule evaluated"
            );
            alerts.extend(produced);
        }

        alerts
    }

    /// Kinds of the registered rules, in evaluation order
    pub fn rule_kinds(&self) -> Vec<AlertKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }
}
