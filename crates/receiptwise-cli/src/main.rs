//! ReceiptWise CLI - Smart alerts and budgets for digital receipts
//!
//! Usage:
//!   receiptwise alerts --receipts wallet.json --budgets budgets.json
//!   receiptwise budgets --receipts wallet.json
//!   receiptwise summary --receipts wallet.json --wallet family
//!   receiptwise ask "how much did I spend on dining?"
//!   receiptwise tips

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let opts = commands::WalletOpts {
        receipts_path: cli.receipts,
        wallet: cli.wallet,
        json: cli.json,
    };

    match cli.command {
        Commands::Alerts { budgets, today } => {
            commands::cmd_alerts(&opts, budgets.as_deref(), today.as_deref())
        }
        Commands::Budgets { budgets } => commands::cmd_budgets(&opts, budgets.as_deref()),
        Commands::Summary => commands::cmd_summary(&opts),
        Commands::Ask { question } => commands::cmd_ask(&opts, &question).await,
        Commands::Tips => commands::cmd_tips(&opts).await,
    }
}
