//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ReceiptWise - Smart alerts and budgets for your digital receipts
#[derive(Parser)]
#[command(name = "receiptwise")]
#[command(about = "Smart alerts, budgets and analytics for digital receipts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Receipt collection file (JSON array of receipts)
    #[arg(long, default_value = "receipts.json", global = true)]
    pub receipts: PathBuf,

    /// Restrict to one wallet scope (personal or family)
    #[arg(long, global = true)]
    pub wallet: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the smart alert engine over the receipt collection
    Alerts {
        /// Budget file (JSON object of category -> limit); enables the
        /// budget-overage rule
        #[arg(short, long)]
        budgets: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD, defaults to the local date)
        ///
        /// Fixing the date makes return-window output reproducible.
        #[arg(long)]
        today: Option<String>,
    },

    /// Show per-category budget progress
    Budgets {
        /// Budget file (JSON object of category -> limit); defaults to the
        /// built-in seed limits when omitted
        #[arg(short, long)]
        budgets: Option<PathBuf>,
    },

    /// Show the spending summary (totals and category breakdown)
    Summary,

    /// Ask the AI advisor a question about your receipts
    Ask {
        /// The question to ask
        question: String,
    },

    /// Generate financial tips from the AI advisor
    Tips,
}
