//! ReceiptWise Core Library
//!
//! Shared functionality for the ReceiptWise receipt wallet:
//! - Receipt, category, wallet and budget models
//! - Smart alert engine (fraud, return windows, recurring vendors,
//!   spending spikes, budget overages, loyalty reminders)
//! - Budget progress tracker
//! - Spending analytics aggregation
//! - JSON receipt/budget ingestion
//! - Pluggable AI advisor backends (Ollama, mock)

pub mod ai;
pub mod alerts;
pub mod analytics;
pub mod budget;
pub mod error;
pub mod import;
pub mod models;

pub use ai::{Advisor, FinancialTip, MockAdvisor, OllamaAdvisor, TipKind};
pub use alerts::{Alert, AlertEngine, AlertKind, AlertRule, EvalContext, RuleConfig, Severity};
pub use analytics::{CategorySpend, SpendingSummary};
pub use budget::{budget_progress, BudgetBook, BudgetProgress};
pub use error::{Error, Result};
pub use import::{load_budgets, load_receipts};
pub use models::{wallet_scope, Category, Receipt, ReceiptItem, Wallet};
