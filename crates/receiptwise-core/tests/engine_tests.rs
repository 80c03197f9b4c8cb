//! End-to-end tests for the alert engine and budget tracker

use chrono::NaiveDate;
use receiptwise_core::{
    budget_progress, AlertEngine, AlertKind, BudgetBook, EvalContext, Receipt, Severity,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
}

fn date_days_ago(days: i64) -> String {
    (today() - chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn identical_inputs_yield_identical_alert_sequences() {
    let receipts = vec![
        Receipt::new("1", date_days_ago(25), "Gadget Hub", 2500.0, "Shopping"),
        Receipt::new("2", date_days_ago(3), "Cafe X", 450.0, "Dining"),
        Receipt::new("3", date_days_ago(2), "Cafe X", 450.0, "Dining"),
        Receipt::new("4", date_days_ago(1), "Cafe X", 450.0, "Dining"),
        Receipt::new("5", date_days_ago(10), "Duplicate Store", 900.0, "Other")
            .with_fraud("Duplicate of an earlier transaction"),
    ];
    let mut budgets = BudgetBook::new();
    budgets.set("Dining", 1500.0).unwrap();

    let engine = AlertEngine::new();
    let ctx = EvalContext::new(&receipts, today()).with_budgets(&budgets);

    let first = engine.evaluate(&ctx);
    let second = engine.evaluate(&ctx);
    assert_eq!(first, second);

    let ids: Vec<&str> = first.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "fraud-alert",
            "return-1",
            "recurring-payment-alert",
            "budget-Dining",
            "loyalty-reminder",
        ]
    );
}

#[test]
fn empty_collection_produces_no_alerts_and_budget_only_progress() {
    let receipts: Vec<Receipt> = vec![];
    let budgets = BudgetBook::with_defaults();

    let engine = AlertEngine::new();
    let alerts = engine.evaluate(&EvalContext::new(&receipts, today()).with_budgets(&budgets));
    assert!(alerts.is_empty());

    let progress = budget_progress(&receipts, &budgets);
    assert_eq!(progress.len(), budgets.len());
    assert!(progress.iter().all(|p| p.spent == 0.0));
}

#[test]
fn single_fraudulent_receipt_yields_one_fraud_alert() {
    let receipts = vec![
        Receipt::new("1", date_days_ago(2), "Ghost Mart", 700.0, "Other")
            .with_fraud("Vendor does not exist"),
    ];

    let alerts = AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()));
    let fraud: Vec<_> = alerts.iter().filter(|a| a.kind == AlertKind::Fraud).collect();
    assert_eq!(fraud.len(), 1);
    assert_eq!(fraud[0].id, "fraud-alert");
    assert_eq!(fraud[0].severity, Severity::Alert);
    assert!(fraud[0].description.contains('1'));
}

#[test]
fn recurring_vendor_reports_only_the_top_vendor() {
    let mut receipts: Vec<Receipt> = (1..=4)
        .map(|i| Receipt::new(format!("c{}", i), date_days_ago(i), "Cafe X", 300.0, "Dining"))
        .collect();
    receipts.push(Receipt::new("o1", date_days_ago(5), "Other Shop", 300.0, "Dining"));
    receipts.push(Receipt::new("o2", date_days_ago(6), "Other Shop", 300.0, "Dining"));

    let alerts = AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()));
    let recurring: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::RecurringVendor)
        .collect();
    assert_eq!(recurring.len(), 1);
    assert!(recurring[0].description.contains("Cafe X"));
    assert!(recurring[0].description.contains("4 times"));
}

#[test]
fn return_window_countdown_matches_purchase_age() {
    // 25 days old and above the high-spend bar: 5 days remain.
    let receipts = vec![Receipt::new(
        "big",
        date_days_ago(25),
        "Gadget Hub",
        2500.0,
        "Shopping",
    )];
    let alerts = AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()));
    let returns: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::ReturnWindow)
        .collect();
    assert_eq!(returns.len(), 1);
    assert!(returns[0].description.contains("Only 5 days left"));

    // 31 days old: window expired, nothing fires.
    let receipts = vec![Receipt::new(
        "old",
        date_days_ago(31),
        "Gadget Hub",
        2500.0,
        "Shopping",
    )];
    let alerts = AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()));
    assert!(alerts.iter().all(|a| a.kind != AlertKind::ReturnWindow));
}

#[test]
fn spending_spike_fires_for_outlier_purchase() {
    // 11 receipts of 45 plus one of 600: average ~91, spike bar ~456.
    let mut receipts: Vec<Receipt> = (1..=11)
        .map(|i| {
            Receipt::new(
                format!("{}", i),
                date_days_ago(2),
                format!("Vendor {}", i),
                45.0,
                "Other",
            )
        })
        .collect();
    receipts.push(Receipt::new("spike", date_days_ago(1), "Gadget Hub", 600.0, "Other"));

    let alerts = AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()));
    let spikes: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::SpendingSpike)
        .collect();
    assert_eq!(spikes.len(), 1);
    assert_eq!(spikes[0].id, "spike-spike");
}

#[test]
fn budget_rule_distinguishes_near_limit_from_overage() {
    let mut budgets = BudgetBook::new();
    budgets.set("Dining", 5000.0).unwrap();

    // 4200 of 5000: near-limit warning, no overage wording.
    let receipts = vec![Receipt::new("1", date_days_ago(1), "Cafe X", 4200.0, "Dining")];
    let alerts =
        AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&budgets));
    let budget_alerts: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::BudgetOverage)
        .collect();
    assert_eq!(budget_alerts.len(), 1);
    assert!(budget_alerts[0].title.contains("Almost Used Up"));

    // 5200 of 5000: overage of exactly 200.
    let receipts = vec![Receipt::new("1", date_days_ago(1), "Cafe X", 5200.0, "Dining")];
    let alerts =
        AlertEngine::new().evaluate(&EvalContext::new(&receipts, today()).with_budgets(&budgets));
    let budget_alerts: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::BudgetOverage)
        .collect();
    assert_eq!(budget_alerts.len(), 1);
    assert!(budget_alerts[0].title.contains("Exceeded"));
    assert!(budget_alerts[0].description.contains("\u{20b9}200.00"));
}

#[test]
fn unbudgeted_spend_reports_no_budget_set() {
    let receipts = vec![Receipt::new("1", date_days_ago(1), "City Gas", 750.0, "Travel")];
    let budgets = BudgetBook::new();

    let progress = budget_progress(&receipts, &budgets);
    assert_eq!(progress.len(), 1);
    let travel = &progress[0];
    assert_eq!(travel.limit, None);
    assert_eq!(travel.percentage, 0.0);
    assert!(!travel.is_over_budget);
}
