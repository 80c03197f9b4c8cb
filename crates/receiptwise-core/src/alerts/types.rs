//! Core types for the smart alert engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of smart alerts the engine can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// One or more receipts were flagged by the fraud classifier
    Fraud,
    /// A high-value purchase's return window is about to close
    ReturnWindow,
    /// The same vendor keeps showing up, likely a subscription
    RecurringVendor,
    /// A single purchase far above the average spend
    SpendingSpike,
    /// A category is near or over its configured budget
    BudgetOverage,
    /// Informational nudge about loyalty programs
    LoyaltyReminder,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Fraud => "fraud",
            AlertKind::ReturnWindow => "return_window",
            AlertKind::RecurringVendor => "recurring_vendor",
            AlertKind::SpendingSpike => "spending_spike",
            AlertKind::BudgetOverage => "budget_overage",
            AlertKind::LoyaltyReminder => "loyalty_reminder",
        }
    }

    /// Styling severity for each kind. Deterministic so recomputation
    /// renders identically.
    pub fn severity(&self) -> Severity {
        match self {
            AlertKind::Fraud => Severity::Alert,
            AlertKind::ReturnWindow => Severity::Warning,
            AlertKind::RecurringVendor => Severity::Attention,
            AlertKind::SpendingSpike => Severity::Warning,
            AlertKind::BudgetOverage => Severity::Warning,
            AlertKind::LoyaltyReminder => Severity::Info,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fraud" => Ok(AlertKind::Fraud),
            "return_window" => Ok(AlertKind::ReturnWindow),
            "recurring_vendor" => Ok(AlertKind::RecurringVendor),
            "spending_spike" => Ok(AlertKind::SpendingSpike),
            "budget_overage" => Ok(AlertKind::BudgetOverage),
            "loyalty_reminder" => Ok(AlertKind::LoyaltyReminder),
            _ => Err(format!("Unknown alert kind: {}", s)),
        }
    }
}

/// Severity level of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
    /// Requires immediate attention
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }

    /// Numeric priority (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
            Severity::Alert => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "attention" => Ok(Severity::Attention),
            "warning" => Ok(Severity::Warning),
            "alert" => Ok(Severity::Alert),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A derived, non-persistent notification surfaced to the user.
///
/// Alerts are recomputed on every engine pass. Ids are stable for a given
/// cause (`fraud-alert`, `return-<receiptId>`, ...) so identical inputs
/// yield identical alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Alert {
    /// Create an alert. Severity is derived from the kind.
    pub fn new(
        kind: AlertKind,
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity: kind.severity(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_roundtrip() {
        for kind in [
            AlertKind::Fraud,
            AlertKind::ReturnWindow,
            AlertKind::RecurringVendor,
            AlertKind::SpendingSpike,
            AlertKind::BudgetOverage,
            AlertKind::LoyaltyReminder,
        ] {
            assert_eq!(AlertKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_severity_priority_ordering() {
        assert!(Severity::Alert.priority() > Severity::Warning.priority());
        assert!(Severity::Warning.priority() > Severity::Attention.priority());
        assert!(Severity::Attention.priority() > Severity::Info.priority());
    }

    #[test]
    fn test_alert_severity_follows_kind() {
        let alert = Alert::new(AlertKind::Fraud, "fraud-alert", "t", "d");
        assert_eq!(alert.severity, Severity::Alert);

        let alert = Alert::new(AlertKind::LoyaltyReminder, "loyalty-reminder", "t", "d");
        assert_eq!(alert.severity, Severity::Info);
    }
}
