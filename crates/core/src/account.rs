//! # Account Module
//!
//! Account holds a non-negative balance and delegates its periodic service
//! charge to an optional, swappable `ChargeStrategy`.
//!
//! The account is tied to a client only by `ClientNumber`; there is no
//! referential check against any `Client`.

use crate::charge::ChargeStrategy;
use crate::error::{CoreError, CoreResult};
use crate::ids::{AccountNumber, ClientNumber};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Bank account.
///
/// # Invariant
/// `balance >= 0` after construction and after every operation that returned `Ok`.
/// Rejected operations leave the balance untouched.
#[derive(Clone)]
pub struct Account {
    account_number: AccountNumber,
    client_number: ClientNumber,
    balance: Decimal,
    charge_strategy: Option<Arc<dyn ChargeStrategy>>,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with a zero balance and no charge strategy
    pub fn new(account_number: AccountNumber, client_number: ClientNumber) -> Self {
        Self {
            account_number,
            client_number,
            balance: Decimal::ZERO,
            charge_strategy: None,
            opened_at: Utc::now(),
        }
    }

    /// Open an account with an opening balance.
    ///
    /// Fails with `InvalidArgument` if the balance is negative.
    pub fn with_balance(
        account_number: AccountNumber,
        client_number: ClientNumber,
        balance: impl Into<Decimal>,
    ) -> CoreResult<Self> {
        let mut account = Self::new(account_number, client_number);
        account.set_balance(balance.into())?;
        Ok(account)
    }

    /// Attach a charge strategy (builder style)
    pub fn with_strategy(mut self, strategy: Arc<dyn ChargeStrategy>) -> Self {
        self.charge_strategy = Some(strategy);
        self
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn client_number(&self) -> ClientNumber {
        self.client_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Override the balance directly.
    ///
    /// Only the new value is checked (must be >= 0); the current balance plays
    /// no part, unlike `withdraw`.
    pub fn set_balance(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount < Decimal::ZERO {
            return Err(CoreError::invalid_argument(format!(
                "Balance cannot be negative: {}",
                amount
            )));
        }
        self.balance = amount;
        Ok(())
    }

    /// Add `amount` to the balance. `amount` must be strictly positive.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::invalid_argument(format!(
                "Deposit amount must be positive: {}",
                amount
            )));
        }
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            CoreError::invalid_argument(format!(
                "Deposit of {} would overflow balance {}",
                amount, self.balance
            ))
        })?;
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// Only `amount > balance` is rejected. Zero and negative amounts are
    /// accepted, and a negative amount increases the balance. Callers that
    /// need the same positivity rule as `deposit` must check it themselves.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount > self.balance {
            return Err(CoreError::insufficient_funds(amount, self.balance));
        }
        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            CoreError::invalid_argument(format!(
                "Withdrawal of {} would overflow balance {}",
                amount, self.balance
            ))
        })?;
        Ok(())
    }

    /// Service charge from the assigned strategy, or zero when none is set.
    ///
    /// Negative strategy output is clamped to zero in release builds and
    /// trips a debug assertion otherwise.
    pub fn calculate_service_charge(&self) -> Decimal {
        match &self.charge_strategy {
            Some(strategy) => {
                let charge = strategy.calculate_charge(self);
                debug_assert!(
                    charge >= Decimal::ZERO,
                    "negative service charge {} from strategy {}",
                    charge,
                    strategy.name()
                );
                charge.max(Decimal::ZERO)
            }
            None => Decimal::ZERO,
        }
    }

    pub fn charge_strategy(&self) -> Option<&Arc<dyn ChargeStrategy>> {
        self.charge_strategy.as_ref()
    }

    /// Swap the charge strategy at runtime. `None` removes it.
    pub fn set_charge_strategy(&mut self, strategy: Option<Arc<dyn ChargeStrategy>>) {
        self.charge_strategy = strategy;
    }

    /// Point-in-time view for display/JSON output
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            account_number: self.account_number,
            client_number: self.client_number,
            balance: self.balance,
            service_charge: self.calculate_service_charge(),
            charge_strategy: self.charge_strategy.as_ref().map(|s| s.name().to_string()),
            opened_at: self.opened_at,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("account_number", &self.account_number)
            .field("client_number", &self.client_number)
            .field("balance", &self.balance)
            .field(
                "charge_strategy",
                &self.charge_strategy.as_ref().map(|s| s.name()),
            )
            .field("opened_at", &self.opened_at)
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (client: {}, balance: {})",
            self.account_number, self.client_number, self.balance
        )
    }
}

/// Serializable view of an `Account`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub account_number: AccountNumber,
    pub client_number: ClientNumber,
    pub balance: Decimal,
    pub service_charge: Decimal,
    pub charge_strategy: Option<String>,
    pub opened_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open(balance: Decimal) -> Account {
        Account::with_balance(AccountNumber::new(1001), ClientNumber::new(5001), balance)
            .unwrap()
    }

    struct Flat(Decimal);

    impl ChargeStrategy for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn calculate_charge(&self, _account: &Account) -> Decimal {
            self.0
        }
    }

    #[test]
    fn test_account_creation() {
        let account = Account::new(AccountNumber::new(1001), ClientNumber::new(5001));

        assert_eq!(account.account_number().value(), 1001);
        assert_eq!(account.client_number().value(), 5001);
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.charge_strategy().is_none());
    }

    #[test]
    fn test_opening_balance_coerces_integers() {
        let account =
            Account::with_balance(AccountNumber::new(1), ClientNumber::new(2), 100).unwrap();
        assert_eq!(account.balance(), dec!(100.0));
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        let err = Account::with_balance(AccountNumber::new(1), ClientNumber::new(2), dec!(-0.01))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_deposit() {
        let mut account = open(dec!(100.0));
        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150.0));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = open(dec!(100.0));

        for amount in [Decimal::ZERO, dec!(-5)] {
            let err = account.deposit(amount).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(account.balance(), dec!(100.0));
        }
    }

    #[test]
    fn test_withdraw() {
        let mut account = open(dec!(150.0));
        account.withdraw(dec!(150)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = open(dec!(150.0));
        let err = account.withdraw(dec!(200)).unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientFunds {
                requested: dec!(200),
                available: dec!(150.0),
            }
        );
        assert_eq!(account.balance(), dec!(150.0));
    }

    #[test]
    fn test_withdraw_accepts_zero_and_negative_amounts() {
        let mut account = open(dec!(10));

        account.withdraw(Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), dec!(10));

        // Negative withdrawal is accepted and grows the balance
        account.withdraw(dec!(-5)).unwrap();
        assert_eq!(account.balance(), dec!(15));
    }

    #[test]
    fn test_set_balance() {
        let mut account = open(dec!(10));

        account.set_balance(dec!(5000)).unwrap();
        assert_eq!(account.balance(), dec!(5000));

        account.set_balance(Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);

        let err = account.set_balance(dec!(-1)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_service_charge_without_strategy_is_zero() {
        for balance in [Decimal::ZERO, dec!(1), dec!(999999.99)] {
            assert_eq!(open(balance).calculate_service_charge(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_service_charge_delegates_to_strategy() {
        let account = open(dec!(100)).with_strategy(Arc::new(Flat(dec!(2.50))));
        assert_eq!(account.calculate_service_charge(), dec!(2.50));
        // Computing a charge never touches the balance
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_strategy_swap_at_runtime() {
        let mut account = open(dec!(1000));
        account.set_charge_strategy(Some(Arc::new(Flat(dec!(5)))));
        assert_eq!(account.calculate_service_charge(), dec!(5));

        account.set_charge_strategy(Some(Arc::new(|a: &Account| a.balance() * dec!(0.001))));
        assert_eq!(account.calculate_service_charge(), dec!(1));

        account.set_charge_strategy(None);
        assert_eq!(account.calculate_service_charge(), Decimal::ZERO);
    }

    #[test]
    fn test_strategy_shared_between_accounts() {
        let shared: Arc<dyn ChargeStrategy> = Arc::new(|a: &Account| a.balance() * dec!(0.01));
        let a = open(dec!(100)).with_strategy(Arc::clone(&shared));
        let b = open(dec!(300)).with_strategy(shared);

        assert_eq!(a.calculate_service_charge(), dec!(1));
        assert_eq!(b.calculate_service_charge(), dec!(3));
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut account = open(Decimal::MAX);

        let err = account.deposit(Decimal::ONE).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_negative_withdrawal_overflow_rejected() {
        let mut account = open(Decimal::MAX);

        let err = account.withdraw(Decimal::MIN).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(account.balance(), Decimal::MAX);

        // Still usable afterwards
        account.withdraw(Decimal::MAX).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "negative service charge"))]
    fn test_negative_strategy_output_clamped() {
        let account = open(dec!(100)).with_strategy(Arc::new(Flat(dec!(-3))));
        assert_eq!(account.calculate_service_charge(), Decimal::ZERO);
    }

    #[test]
    fn test_account_display() {
        let account = open(dec!(150.0));
        assert_eq!(
            account.to_string(),
            "Account 1001 (client: 5001, balance: 150.0)"
        );
    }

    #[test]
    fn test_snapshot() {
        let account = open(dec!(100)).with_strategy(Arc::new(Flat(dec!(2))));
        let snapshot = account.snapshot();

        assert_eq!(snapshot.balance, dec!(100));
        assert_eq!(snapshot.service_charge, dec!(2));
        assert_eq!(snapshot.charge_strategy.as_deref(), Some("flat"));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["account_number"], 1001);
        assert_eq!(json["balance"], "100");
    }
}
