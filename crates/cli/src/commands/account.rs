//! Account command

use anyhow::{Context, Result};
use bankacct_core::{Account, AccountNumber, ClientNumber};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::charges;
use crate::config::CliConfig;

/// Operations applied after opening, in this order
#[derive(Debug, Default)]
pub struct Operations {
    pub set_balance: Option<Decimal>,
    pub deposits: Vec<Decimal>,
    pub withdrawals: Vec<Decimal>,
}

/// Open the account, apply `ops`, print the result
pub fn run(
    config: &CliConfig,
    number: &str,
    client: &str,
    balance: Decimal,
    charge: Option<&str>,
    ops: Operations,
) -> Result<()> {
    let account = open_and_apply(number, client, balance, charge, ops)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&account.snapshot())?);
    } else {
        println!("{}", account);
        println!("Service charge: {}", account.calculate_service_charge());
    }

    Ok(())
}

pub(crate) fn open_and_apply(
    number: &str,
    client: &str,
    balance: Decimal,
    charge: Option<&str>,
    ops: Operations,
) -> Result<Account> {
    let account_number: AccountNumber = number.parse()?;
    let client_number: ClientNumber = client.parse()?;

    let mut account = Account::with_balance(account_number, client_number, balance)?;
    if let Some(spec) = charge {
        let strategy = charges::parse_strategy(spec)?;
        info!(account = %account_number, strategy = strategy.name(), "Charge strategy assigned");
        account.set_charge_strategy(Some(strategy));
    }
    info!(account = %account_number, client = %client_number, %balance, "Account opened");

    if let Some(amount) = ops.set_balance {
        apply(&mut account, "set_balance", amount, Account::set_balance)?;
    }
    for amount in ops.deposits {
        apply(&mut account, "deposit", amount, Account::deposit)?;
    }
    for amount in ops.withdrawals {
        apply(&mut account, "withdraw", amount, Account::withdraw)?;
    }

    Ok(account)
}

fn apply(
    account: &mut Account,
    operation: &str,
    amount: Decimal,
    op: fn(&mut Account, Decimal) -> bankacct_core::CoreResult<()>,
) -> Result<()> {
    match op(account, amount) {
        Ok(()) => {
            info!(
                account = %account.account_number(),
                operation,
                %amount,
                balance = %account.balance(),
                "Operation applied"
            );
            Ok(())
        }
        Err(e) => {
            warn!(
                account = %account.account_number(),
                operation,
                %amount,
                error = %e,
                "Operation rejected"
            );
            Err(e).with_context(|| format!("{} {} failed", operation, amount))
        }
    }
}
