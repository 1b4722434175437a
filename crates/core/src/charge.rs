//! Service charge strategy - the interface for fee policies
//!
//! An `Account` holds at most one strategy and asks it for the periodic
//! service charge. Concrete fee formulas live with the caller.

use crate::account::Account;
use rust_decimal::Decimal;

/// Fee policy that computes the service charge for an account.
///
/// Implementations receive a shared reference and therefore cannot mutate
/// the account. One instance may be shared by many accounts (via `Arc`), so
/// implementations must be `Send + Sync`.
///
/// The returned charge is expected to be non-negative.
///
/// # Example
/// ```
/// use bankacct_core::{Account, AccountNumber, ChargeStrategy, ClientNumber};
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// struct FlatFee(Decimal);
///
/// impl ChargeStrategy for FlatFee {
///     fn calculate_charge(&self, _account: &Account) -> Decimal {
///         self.0
///     }
/// }
///
/// let account = Account::new(AccountNumber::new(1001), ClientNumber::new(5001))
///     .with_strategy(Arc::new(FlatFee(Decimal::new(250, 2))));
/// assert_eq!(account.calculate_service_charge(), Decimal::new(250, 2));
/// ```
pub trait ChargeStrategy: Send + Sync {
    /// Strategy name for debugging/snapshots
    fn name(&self) -> &str {
        "custom"
    }

    /// Compute the service charge for `account`
    fn calculate_charge(&self, account: &Account) -> Decimal;
}

impl<F> ChargeStrategy for F
where
    F: Fn(&Account) -> Decimal + Send + Sync,
{
    fn calculate_charge(&self, account: &Account) -> Decimal {
        self(account)
    }
}
