//! Thread-safe account handle
//!
//! `Account` itself has no internal locking. `SharedAccount` serializes
//! every operation behind a mutex so concurrent callers cannot interleave
//! a balance check with another caller's mutation.

use crate::account::Account;
use crate::charge::ChargeStrategy;
use crate::error::CoreResult;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, lock-guarded handle to one `Account`.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    // A poisoned lock only means another thread panicked mid-call; every
    // Account operation validates before mutating, so the data is still sound.
    fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn balance(&self) -> Decimal {
        self.lock().balance()
    }

    pub fn deposit(&self, amount: Decimal) -> CoreResult<()> {
        self.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: Decimal) -> CoreResult<()> {
        self.lock().withdraw(amount)
    }

    pub fn set_balance(&self, amount: Decimal) -> CoreResult<()> {
        self.lock().set_balance(amount)
    }

    pub fn calculate_service_charge(&self) -> Decimal {
        self.lock().calculate_service_charge()
    }

    pub fn set_charge_strategy(&self, strategy: Option<Arc<dyn ChargeStrategy>>) {
        self.lock().set_charge_strategy(strategy);
    }

    /// Run `f` with exclusive access, e.g. to combine several operations atomically
    pub fn with<R>(&self, f: impl FnOnce(&mut Account) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current account state
    pub fn get(&self) -> Account {
        self.lock().clone()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
