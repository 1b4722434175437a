//! Bankacct CLI - open accounts and clients from the command line
//!
//! Usage:
//! ```bash
//! bankacct account --number 1001 --client 5001 --balance 100 --deposit 50 --withdraw 30
//! bankacct account --number 1001 --client 5001 --balance 100 --charge flat:2.50 --json
//! bankacct client --number 5001 --first Ada --last Lovelace --email ada@example.com
//! bankacct demo
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod charges;
mod commands;
mod config;

use commands::{account, client, demo};
use config::CliConfig;

/// Bankacct - accounts with pluggable service charges
#[derive(Parser)]
#[command(name = "bankacct")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level (overrides BANKACCT_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print JSON output (overrides BANKACCT_JSON)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an account and apply operations to it
    Account {
        /// Account number (integer)
        #[arg(long)]
        number: String,
        /// Client number (integer)
        #[arg(long)]
        client: String,
        /// Opening balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
        /// Charge policy: flat:<amount> or percent:<rate> (overrides BANKACCT_SERVICE_CHARGE)
        #[arg(long)]
        charge: Option<String>,
        /// Override the balance before other operations
        #[arg(long, allow_negative_numbers = true)]
        set_balance: Option<Decimal>,
        /// Amounts to deposit, applied in order
        #[arg(long, allow_negative_numbers = true)]
        deposit: Vec<Decimal>,
        /// Amounts to withdraw, applied in order after deposits
        #[arg(long, allow_negative_numbers = true)]
        withdraw: Vec<Decimal>,
    },

    /// Validate and show a client record
    Client {
        /// Client number (integer)
        #[arg(long)]
        number: String,
        /// First name
        #[arg(long)]
        first: String,
        /// Last name
        #[arg(long)]
        last: String,
        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Run the deposit/withdraw walkthrough
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.json {
        config.json = true;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_target(false)
        .init();

    match cli.command {
        Commands::Account {
            number,
            client,
            balance,
            charge,
            set_balance,
            deposit,
            withdraw,
        } => {
            let ops = account::Operations {
                set_balance,
                deposits: deposit,
                withdrawals: withdraw,
            };
            let charge = charge.or_else(|| config.service_charge.clone());
            account::run(&config, &number, &client, balance, charge.as_deref(), ops)?;
        }

        Commands::Client {
            number,
            first,
            last,
            email,
        } => {
            client::run(&config, &number, &first, &last, &email)?;
        }

        Commands::Demo => {
            demo::run()?;
        }
    }

    Ok(())
}
