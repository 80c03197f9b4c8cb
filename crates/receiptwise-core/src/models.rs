//! Domain models for ReceiptWise

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single purchase transaction, produced by upstream extraction
/// (image/text upload flow) and immutable once created.
///
/// Amounts are in major currency units (rupees). Dates are kept as the
/// ISO-8601 string the extractor produced; an unparseable date degrades
/// per-rule rather than failing deserialization of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    /// Calendar date of the purchase, ISO-8601 (`YYYY-MM-DD`).
    pub date: String,
    /// Free-text vendor name, used as an exact-match grouping key.
    pub vendor: String,
    pub total_amount: f64,
    #[serde(default)]
    pub itemized_list: Vec<ReceiptItem>,
    /// Free-text category. Alert and budget arithmetic treat this as an
    /// opaque key; `Category::parse` maps it for display purposes.
    pub category: String,
    /// Extraction confidence in [0,1]. Provenance metadata only.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub is_fraudulent: bool,
    /// Human-readable explanation, required when `is_fraudulent` is set.
    #[serde(default)]
    pub fraudulent_details: String,
    /// Partition key for multi-wallet filtering. Receipts imported before
    /// wallets existed carry no tag and are visible in every scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
}

impl Receipt {
    /// Create a non-fraudulent receipt
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        vendor: impl Into<String>,
        total_amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            vendor: vendor.into(),
            total_amount,
            itemized_list: Vec::new(),
            category: category.into(),
            confidence: 1.0,
            is_fraudulent: false,
            fraudulent_details: String::new(),
            wallet: None,
        }
    }

    /// Mark this receipt as flagged by the upstream fraud classifier
    pub fn with_fraud(mut self, details: impl Into<String>) -> Self {
        self.is_fraudulent = true;
        self.fraudulent_details = details.into();
        self
    }

    /// Assign this receipt to a wallet
    pub fn with_wallet(mut self, wallet: Wallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Parse the purchase date. Returns `None` for malformed dates so
    /// date-based rules can skip the record instead of failing.
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Whether this receipt belongs in the given wallet scope
    pub fn visible_in(&self, wallet: Wallet) -> bool {
        self.wallet.map_or(true, |own| own == wallet)
    }

    /// Validate the data-integrity invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidData("receipt id must not be empty".into()));
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "receipt {}: totalAmount must be a non-negative number",
                self.id
            )));
        }
        if self.is_fraudulent && self.fraudulent_details.trim().is_empty() {
            return Err(Error::InvalidData(format!(
                "receipt {}: fraudulent receipts require fraudulentDetails",
                self.id
            )));
        }
        Ok(())
    }
}

/// A line item on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Item description. Accepts the legacy `item` field name on input.
    #[serde(alias = "item")]
    pub name: String,
    pub price: f64,
}

/// Wallet partition label for shared-wallet filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wallet {
    Personal,
    Family,
}

impl Wallet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Family => "Family",
        }
    }
}

impl std::str::FromStr for Wallet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "family" => Ok(Self::Family),
            _ => Err(format!("Unknown wallet: {} (expected personal or family)", s)),
        }
    }
}

impl std::fmt::Display for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restrict a receipt collection to the active wallet scope.
///
/// `None` means no wallet filtering is in effect and the full collection
/// is returned. Untagged receipts are visible in every scope.
pub fn wallet_scope(receipts: &[Receipt], wallet: Option<Wallet>) -> Vec<Receipt> {
    match wallet {
        None => receipts.to_vec(),
        Some(w) => receipts
            .iter()
            .filter(|r| r.visible_in(w))
            .cloned()
            .collect(),
    }
}

/// The fixed spending-category set.
///
/// Extraction produces free text, so parsing is lenient: anything outside
/// the known set maps to `Other`. This mapping is display-only; alert and
/// budget arithmetic key on the raw category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Dining,
    Travel,
    Health,
    Entertainment,
    Shopping,
    Utilities,
    Rent,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Groceries,
        Category::Dining,
        Category::Travel,
        Category::Health,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Rent,
        Category::Other,
    ];

    /// Lenient parse with an exhaustive `Other` fallback
    pub fn parse(s: &str) -> Category {
        match s.trim().to_lowercase().as_str() {
            "groceries" => Category::Groceries,
            "dining" => Category::Dining,
            "travel" => Category::Travel,
            "health" => Category::Health,
            "entertainment" => Category::Entertainment,
            "shopping" => Category::Shopping,
            "utilities" => Category::Utilities,
            "rent" => Category::Rent,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Dining => "Dining",
            Category::Travel => "Travel",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Rent => "Rent",
            Category::Other => "Other",
        }
    }

    /// Icon token for presentation layers
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Groceries => "shopping-cart",
            Category::Dining => "utensils",
            Category::Travel => "plane",
            Category::Health => "heart-pulse",
            Category::Entertainment => "clapperboard",
            Category::Shopping => "shopping-bag",
            Category::Utilities => "plug-zap",
            Category::Rent => "home",
            Category::Other => "receipt",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
