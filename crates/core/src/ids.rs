//! # Identifier Module
//!
//! Integer identifiers for accounts and clients. Typed callers build them
//! from `i64` directly; untyped input (text, decimals, floats) is accepted
//! only when it denotes an integer, otherwise `CoreError::InvalidArgument`.

use crate::error::{CoreError, CoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }

            fn not_an_integer(raw: impl fmt::Display) -> CoreError {
                CoreError::invalid_argument(format!(
                    "{} must be an integer, got {}",
                    $label, raw
                ))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> CoreResult<Self> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| Self::not_an_integer(format!("{:?}", s)))
            }
        }

        impl TryFrom<Decimal> for $name {
            type Error = CoreError;

            fn try_from(value: Decimal) -> CoreResult<Self> {
                if !value.fract().is_zero() {
                    return Err(Self::not_an_integer(value));
                }
                value
                    .to_i64()
                    .map(Self)
                    .ok_or_else(|| Self::not_an_integer(value))
            }
        }

        impl TryFrom<f64> for $name {
            type Error = CoreError;

            fn try_from(value: f64) -> CoreResult<Self> {
                // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
                let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
                if value.is_finite() && value.fract() == 0.0 && in_range {
                    Ok(Self(value as i64))
                } else {
                    Err(Self::not_an_integer(value))
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Account number. Fixed for the lifetime of an `Account`.
    AccountNumber,
    "Account number"
);

integer_id!(
    /// Client number. Shared by convention between `Client` and `Account`;
    /// nothing checks that a client with this number exists.
    ClientNumber,
    "Client number"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_integer_text() {
        assert_eq!("1001".parse::<AccountNumber>().unwrap().value(), 1001);
        assert_eq!(" 5001 ".parse::<ClientNumber>().unwrap().value(), 5001);
        assert_eq!("-7".parse::<AccountNumber>().unwrap().value(), -7);
    }

    #[test]
    fn test_parse_rejects_non_integer_text() {
        for raw in ["12.5", "abc", "", "1e3", "0x10"] {
            let err = raw.parse::<AccountNumber>().unwrap_err();
            assert!(err.is_invalid_argument(), "{raw:?} should be rejected");
        }
        let err = "5001.0".parse::<ClientNumber>().unwrap_err();
        assert!(err.to_string().contains("Client number must be an integer"));
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(AccountNumber::try_from(dec!(1001)).unwrap().value(), 1001);
        assert_eq!(AccountNumber::try_from(dec!(1001.000)).unwrap().value(), 1001);
        assert!(AccountNumber::try_from(dec!(1001.5))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_from_float() {
        assert_eq!(ClientNumber::try_from(5001.0).unwrap().value(), 5001);
        assert!(ClientNumber::try_from(5001.25).is_err());
        assert!(ClientNumber::try_from(f64::NAN).is_err());
        assert!(ClientNumber::try_from(f64::INFINITY).is_err());
        assert!(ClientNumber::try_from(1e19).is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let id = AccountNumber::new(1001);
        assert_eq!(id.to_string(), "1001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "1001");
        assert!(serde_json::from_str::<AccountNumber>("1001.5").is_err());
    }
}
