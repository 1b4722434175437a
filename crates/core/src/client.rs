//! # Client Module
//!
//! Client is an immutable value object: every field is validated once at
//! construction and never changes afterwards.

use crate::email::{EmailValidator, SyntaxValidator};
use crate::error::{CoreError, CoreResult};
use crate::ids::ClientNumber;
use serde::Serialize;
use std::fmt;

/// Bank client identity and contact data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    client_number: ClientNumber,
    first_name: String,
    last_name: String,
    email_address: String,
}

impl Client {
    /// Create a client, validating the email with `SyntaxValidator`.
    ///
    /// # Errors
    /// - `InvalidArgument` if either name is blank after trimming
    /// - `InvalidEmail` if the address fails syntax validation
    pub fn new(
        client_number: ClientNumber,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> CoreResult<Self> {
        Self::with_validator(
            client_number,
            first_name,
            last_name,
            email_address,
            &SyntaxValidator,
        )
    }

    /// Create a client using a caller-supplied email validator.
    pub fn with_validator(
        client_number: ClientNumber,
        first_name: &str,
        last_name: &str,
        email_address: &str,
        validator: &dyn EmailValidator,
    ) -> CoreResult<Self> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(CoreError::invalid_argument("First name cannot be blank."));
        }

        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(CoreError::invalid_argument("Last name cannot be blank."));
        }

        let email_address = validator.normalize(email_address)?;

        Ok(Self {
            client_number,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address,
        })
    }

    pub fn client_number(&self) -> ClientNumber {
        self.client_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Normalized email address
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client {} ({})", self.client_number, self.full_name())
    }
}
