//! JSON ingestion for receipt collections and budget files
//!
//! The engine's contract with the upstream extraction pipeline is "supply
//! a valid receipt collection". These loaders are the file-based end of
//! that contract: parse, validate every record, reject bad data before it
//! reaches evaluation.

use std::collections::BTreeMap;
use std::path::Path;

use crate::budget::BudgetBook;
use crate::error::Result;
use crate::models::Receipt;

/// Load and validate a receipt collection from a JSON array file.
///
/// Every record must satisfy the data-integrity invariants (non-negative
/// total, fraud details when flagged). The first invalid record fails the
/// whole load; evaluation never sees partially-valid data.
pub fn load_receipts(path: &Path) -> Result<Vec<Receipt>> {
    let raw = std::fs::read_to_string(path)?;
    let receipts: Vec<Receipt> = serde_json::from_str(&raw)?;

    for receipt in &receipts {
        receipt.validate()?;
    }

    tracing::info!(count = receipts.len(), path = %path.display(), "Loaded receipts");
    Ok(receipts)
}

/// Load a budget book from a JSON object file (`{"Dining": 4000, ...}`).
///
/// JSON object key order is not preserved by the parser, so entries are
/// inserted in sorted key order for deterministic iteration.
pub fn load_budgets(path: &Path) -> Result<BudgetBook> {
    let raw = std::fs::read_to_string(path)?;
    let limits: BTreeMap<String, f64> = serde_json::from_str(&raw)?;

    let mut book = BudgetBook::new();
    for (category, limit) in limits {
        book.set(&category, limit)?;
    }

    tracing::info!(count = book.len(), path = %path.display(), "Loaded budgets");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_receipts_valid() {
        let file = write_temp(
            r#"[
                {
                    "id": "1",
                    "date": "2024-07-20",
                    "vendor": "Fresh Mart",
                    "totalAmount": 6200,
                    "itemizedList": [{"item": "Organic Avocados", "price": 490}],
                    "category": "Groceries",
                    "confidence": 0.95,
                    "isFraudulent": false,
                    "fraudulentDetails": ""
                }
            ]"#,
        );

        let receipts = load_receipts(file.path()).unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].vendor, "Fresh Mart");
        assert_eq!(receipts[0].itemized_list[0].name, "Organic Avocados");
    }

    #[test]
    fn test_load_receipts_rejects_invalid_record() {
        let file = write_temp(
            r#"[
                {
                    "id": "1",
                    "date": "2024-07-20",
                    "vendor": "Fresh Mart",
                    "totalAmount": -5,
                    "category": "Groceries"
                }
            ]"#,
        );
        assert!(load_receipts(file.path()).is_err());
    }

    #[test]
    fn test_load_receipts_rejects_malformed_json() {
        let file = write_temp("not json");
        assert!(load_receipts(file.path()).is_err());
    }

    #[test]
    fn test_load_budgets() {
        let file = write_temp(r#"{"Dining": 4000, "Groceries": 8000}"#);
        let book = load_budgets(file.path()).unwrap();
        assert_eq!(book.limit("Dining"), Some(4000.0));
        assert_eq!(book.limit("Groceries"), Some(8000.0));
    }

    #[test]
    fn test_load_budgets_rejects_negative_limit() {
        let file = write_temp(r#"{"Dining": -4000}"#);
        assert!(load_budgets(file.path()).is_err());
    }
}
