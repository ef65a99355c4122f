//! Tally CLI - Personal spend tracker
//!
//! Usage:
//!   tally init                                  Initialize database
//!   tally add --amount 5.75 --merchant Cafe     Record a transaction
//!   tally rules add starbucks Dining            Add a categorization rule
//!   tally insights --month 2024-03              Monthly spend vs budgets
//!   tally serve --port 8000                     Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(
                &cli.db,
                &host,
                port,
                cli.no_encrypt,
                static_dir.as_deref(),
            )
            .await
        }
        Commands::Add {
            amount,
            merchant,
            description,
            category,
            date,
            account,
            currency,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_add(
                &db,
                commands::AddArgs {
                    amount,
                    merchant,
                    description,
                    category,
                    date,
                    account,
                    currency,
                },
            )
        }
        Commands::Transactions { limit, category } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_transactions_list(&db, limit, category.as_deref())
        }
        Commands::Rules { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(RulesAction::List) => commands::cmd_rules_list(&db),
                Some(RulesAction::Add { keyword, category }) => {
                    commands::cmd_rules_add(&db, &keyword, &category)
                }
                Some(RulesAction::Delete { id }) => commands::cmd_rules_delete(&db, id),
                Some(RulesAction::Test {
                    merchant,
                    description,
                }) => commands::cmd_rules_test(&db, &merchant, description.as_deref()),
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_budgets_list(&db, None),
                Some(BudgetsAction::List { month }) => {
                    commands::cmd_budgets_list(&db, month.as_deref())
                }
                Some(BudgetsAction::Set {
                    category,
                    limit,
                    month,
                }) => commands::cmd_budgets_set(&db, &category, limit, month.as_deref()),
            }
        }
        Commands::Insights { month, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_insights(&db, month.as_deref(), json)
        }
        Commands::Categories => commands::cmd_categories(),
    }
}
