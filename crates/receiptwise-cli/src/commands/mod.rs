//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `alerts` - Smart alert engine runs
//! - `budgets` - Budget progress display
//! - `summary` - Spending analytics display
//! - `advisor` - AI advisor commands (ask, tips)

pub mod advisor;
pub mod alerts;
pub mod budgets;
pub mod summary;

// Re-export command functions for main.rs
pub use advisor::*;
pub use alerts::*;
pub use budgets::*;
pub use summary::*;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use receiptwise_core::{load_receipts, wallet_scope, Receipt, Wallet};

/// Shared per-invocation options: where the receipts live, which wallet
/// scope is active, and whether to emit JSON.
pub struct WalletOpts {
    pub receipts_path: PathBuf,
    pub wallet: Option<String>,
    pub json: bool,
}

/// Load the receipt collection and restrict it to the active wallet scope
pub fn load_scoped_receipts(opts: &WalletOpts) -> Result<Vec<Receipt>> {
    let receipts = load_receipts(&opts.receipts_path).with_context(|| {
        format!(
            "failed to load receipts from {}",
            opts.receipts_path.display()
        )
    })?;

    let wallet = opts
        .wallet
        .as_deref()
        .map(Wallet::from_str)
        .transpose()
        .map_err(|e| anyhow!(e))?;

    Ok(wallet_scope(&receipts, wallet))
}
