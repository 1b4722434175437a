//! # Bankacct Core
//!
//! Core domain types for Bankacct:
//! - `Account`: non-negative balance with a pluggable service charge policy
//! - `ChargeStrategy`: the capability an account delegates fee calculation to
//! - `Client`: validated, immutable identity and contact data
//! - `SharedAccount`: lock-guarded handle for accounts used across threads

pub mod account;
pub mod charge;
pub mod client;
pub mod email;
pub mod error;
pub mod ids;
pub mod shared;

pub use account::{Account, AccountSnapshot};
pub use charge::ChargeStrategy;
pub use client::Client;
pub use email::{EmailError, EmailValidator, SyntaxValidator};
pub use error::{CoreError, CoreResult};
pub use ids::{AccountNumber, ClientNumber};
pub use shared::SharedAccount;
