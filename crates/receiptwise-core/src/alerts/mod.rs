//! Smart Alert Engine
//!
//! Derives "smart alerts" from a receipt collection: fraud summaries,
//! return-window countdowns, recurring-vendor detection, spending spikes,
//! budget overages and loyalty nudges.
//!
//! The engine is a pure function over its inputs: rules run in a fixed
//! order, read the caller-supplied collection and reference date, and
//! never perform I/O. Recomputing with identical inputs yields an
//! identical alert sequence.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receiptwise_core::alerts::{AlertEngine, EvalContext};
//!
//! let engine = AlertEngine::new();
//! let ctx = EvalContext::new(&receipts, today).with_budgets(&budgets);
//! let alerts = engine.evaluate(&ctx);
//! ```

pub mod budget_watch;
pub mod engine;
pub mod fraud;
pub mod loyalty;
pub mod recurring_vendor;
pub mod return_window;
pub mod spending_spike;
pub mod types;

pub use budget_watch::BudgetWatchRule;
pub use engine::{AlertEngine, AlertRule, EvalContext, RuleConfig};
pub use fraud::FraudRule;
pub use loyalty::LoyaltyRule;
pub use recurring_vendor::RecurringVendorRule;
pub use return_window::ReturnWindowRule;
pub use spending_spike::SpendingSpikeRule;
pub use types::{Alert, AlertKind, Severity};
