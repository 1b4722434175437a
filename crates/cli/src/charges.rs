//! Fee policies selectable from the command line
//!
//! These are demo policies; the core only knows the `ChargeStrategy` trait.

use anyhow::{bail, Context, Result};
use bankacct_core::{Account, ChargeStrategy};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Same fee regardless of balance
#[derive(Debug, Clone, Copy)]
pub struct FlatFee {
    pub fee: Decimal,
}

impl ChargeStrategy for FlatFee {
    fn name(&self) -> &str {
        "flat"
    }

    fn calculate_charge(&self, _account: &Account) -> Decimal {
        self.fee
    }
}

/// Fraction of the current balance, e.g. 0.01 = 1%. Saturates at `Decimal::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct PercentOfBalance {
    pub rate: Decimal,
}

impl ChargeStrategy for PercentOfBalance {
    fn name(&self) -> &str {
        "percent"
    }

    fn calculate_charge(&self, account: &Account) -> Decimal {
        self.rate.saturating_mul(account.balance())
    }
}

/// Parse `flat:<amount>` or `percent:<rate>`
pub fn parse_strategy(spec: &str) -> Result<Arc<dyn ChargeStrategy>> {
    let (kind, value) = spec
        .split_once(':')
        .with_context(|| format!("Charge spec must look like kind:value, got {:?}", spec))?;

    let value: Decimal = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid charge value in {:?}", spec))?;
    if value < Decimal::ZERO {
        bail!("Charge value cannot be negative: {}", value);
    }

    match kind.trim().to_lowercase().as_str() {
        "flat" => Ok(Arc::new(FlatFee { fee: value })),
        "percent" => Ok(Arc::new(PercentOfBalance { rate: value })),
        other => bail!("Unknown charge kind: {} (expected flat or percent)", other),
    }
}
