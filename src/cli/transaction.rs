//! Transaction CLI commands
//!
//! `add`, `list` and `delete` are flattened into the top-level command set.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{TallyError, TallyResult};
use crate::services::transaction::INPUT_DATE_FORMAT;
use crate::services::{NewTransaction, TransactionService};
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount, e.g. "12.50"; a leading minus is ignored
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction by ID (full, short, or unique prefix)
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let service = TransactionService::new(store, settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            date,
            category,
            description,
        } => {
            let date = date.unwrap_or_else(|| {
                Local::now()
                    .date_naive()
                    .format(INPUT_DATE_FORMAT)
                    .to_string()
            });

            let txn = service.add(NewTransaction {
                date,
                kind,
                amount,
                category: category.unwrap_or_default(),
                description: description.unwrap_or_default(),
            })?;

            println!("Transaction added.");
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list()?;
            let total = transactions.len();
            let shown: Vec<_> = transactions.into_iter().take(limit).collect();

            print!("{}", format_transaction_register(&shown, settings));
            if total > shown.len() {
                println!("Showing {} of {} transactions.", shown.len(), total);
            }
        }

        TransactionCommands::Delete { id } => {
            if !service.delete(&id)? {
                return Err(TallyError::transaction_not_found(id));
            }
            println!("Transaction deleted.");
        }
    }

    Ok(())
}
