//! Walkthrough: open, deposit, overdraw attempt, withdraw everything

use anyhow::Result;
use bankacct_core::{Account, AccountNumber, ClientNumber};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::warn;

use crate::charges::FlatFee;

pub fn run() -> Result<()> {
    println!("=== Bankacct demo ===\n");

    let mut account =
        Account::with_balance(AccountNumber::new(1001), ClientNumber::new(5001), 100)?;
    println!("Opened:        {}", account);

    account.deposit(Decimal::from(50))?;
    println!("Deposit 50:    {}", account);

    match account.withdraw(Decimal::from(200)) {
        Ok(()) => println!("Withdraw 200:  {}", account),
        Err(e) => {
            warn!(error = %e, "Withdrawal rejected");
            println!("Withdraw 200:  rejected ({})", e);
            println!("               {}", account);
        }
    }

    println!("Service charge (no strategy): {}", account.calculate_service_charge());
    account.set_charge_strategy(Some(Arc::new(FlatFee {
        fee: Decimal::new(250, 2),
    })));
    println!("Service charge (flat 2.50):   {}", account.calculate_service_charge());

    account.withdraw(Decimal::from(150))?;
    println!("Withdraw 150:  {}", account);

    Ok(())
}
