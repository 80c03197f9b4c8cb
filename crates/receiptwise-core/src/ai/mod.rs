//! Pluggable AI advisor backends
//!
//! The advisor answers natural-language questions about a receipt
//! collection and generates short financial tips. Its output is advisory
//! only: callers must treat failures as "no advice" via the degradation
//! helpers below, never as a hard error surfaced to the user.
//!
//! # Architecture
//!
//! - `Advisor` trait: the interface both capabilities share
//! - Backend implementations: `OllamaAdvisor`, `MockAdvisor`
//! - `query_or_fallback` / `tips_or_empty`: degradation helpers
//!
//! # Configuration
//!
//! Environment variables for the Ollama backend:
//! - `OLLAMA_HOST`: Ollama server URL (required)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)

mod mock;
mod ollama;

pub use mock::MockAdvisor;
pub use ollama::OllamaAdvisor;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Receipt;

/// Generic advisory sentence shown when the advisor fails or goes quiet
pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't analyze your receipts right now. Please try again in a moment.";

/// Kinds of financial tips the advisor produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    /// Cheaper brand or generic alternative for a purchased item
    Alternative,
    /// Regularly bought item worth a reorder reminder
    Reorder,
    /// General savings advice based on category mix
    SavingsTip,
}

impl TipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipKind::Alternative => "alternative",
            TipKind::Reorder => "reorder",
            TipKind::SavingsTip => "savings_tip",
        }
    }
}

/// A single advisory recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub title: String,
    pub description: String,
}

/// Trait defining the advisor interface.
///
/// Backends should be Send + Sync to allow use across async tasks. The
/// receipt collection is passed as opaque structured data; the advisor
/// never mutates it.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Answer a free-text question about the receipt collection
    async fn query(
        &self,
        question: &str,
        receipts: &[Receipt],
        today: NaiveDate,
    ) -> Result<String>;

    /// Generate 2-3 short financial tips from the receipt collection
    async fn tips(&self, receipts: &[Receipt]) -> Result<Vec<FinancialTip>>;

    /// Whether the backend is reachable
    async fn health_check(&self) -> bool;
}

/// Run a query, degrading to a generic advisory sentence on failure or an
/// empty answer. The caller never sees a hard advisor failure.
pub async fn query_or_fallback(
    advisor: &dyn Advisor,
    question: &str,
    receipts: &[Receipt],
    today: NaiveDate,
) -> String {
    match advisor.query(question, receipts, today).await {
        Ok(answer) if !answer.trim().is_empty() => answer,
        Ok(_) => FALLBACK_ANSWER.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Advisor query failed");
            FALLBACK_ANSWER.to_string()
        }
    }
}

/// Generate tips, degrading to an empty list on failure
pub async fn tips_or_empty(advisor: &dyn Advisor, receipts: &[Receipt]) -> Vec<FinancialTip> {
    match advisor.tips(receipts).await {
        Ok(tips) => tips,
        Err(e) => {
            tracing::warn!(error = %e, "Advisor tips generation failed");
            vec![]
        }
    }
}
