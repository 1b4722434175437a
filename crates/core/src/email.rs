//! Email syntax validation
//!
//! Deliverability-agnostic: only the shape of the address is checked, no DNS.
//! A successful validation returns the normalized address (trimmed, domain
//! lower-cased) which is what callers should store.

use thiserror::Error;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Why an address failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("The email address is empty.")]
    Empty,

    #[error("The email address is not valid. It must contain an @ sign.")]
    MissingAt,

    #[error("The email address is not valid. It must contain exactly one @ sign.")]
    MultipleAt,

    #[error("There must be something before the @ sign.")]
    EmptyLocalPart,

    #[error("The part before the @ sign is too long ({0} characters, at most 64).")]
    LocalPartTooLong(usize),

    #[error("The part before the @ sign is not valid: {0}")]
    InvalidLocalPart(String),

    #[error("There must be something after the @ sign.")]
    EmptyDomain,

    #[error("The domain name is too long ({0} characters, at most 253).")]
    DomainTooLong(usize),

    #[error("The domain name is not valid: {0}")]
    InvalidDomain(String),

    #[error("The email address is too long ({0} characters, at most 254).")]
    TooLong(usize),
}

/// Email validation service used by `Client` construction.
pub trait EmailValidator {
    /// Validate `raw` and return its normalized form
    fn normalize(&self, raw: &str) -> Result<String, EmailError>;
}

/// Default syntax-only validator
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxValidator;

impl EmailValidator for SyntaxValidator {
    fn normalize(&self, raw: &str) -> Result<String, EmailError> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        let (local, domain) = match email.split_once('@') {
            Some((_, rest)) if rest.contains('@') => return Err(EmailError::MultipleAt),
            Some(parts) => parts,
            None => return Err(EmailError::MissingAt),
        };

        validate_local_part(local)?;
        let domain = domain.to_ascii_lowercase();
        validate_domain(&domain)?;

        let normalized = format!("{}@{}", local, domain);
        let len = normalized.chars().count();
        if len > MAX_ADDRESS_LEN {
            return Err(EmailError::TooLong(len));
        }
        Ok(normalized)
    }
}

/// RFC 5322 atext, plus non-ASCII letters (SMTPUTF8)
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || "!#$%&'*+-/=?^_`{|}~".contains(c)
        || (!c.is_ascii() && c.is_alphanumeric())
}

fn validate_local_part(local: &str) -> Result<(), EmailError> {
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }

    let len = local.chars().count();
    if len > MAX_LOCAL_LEN {
        return Err(EmailError::LocalPartTooLong(len));
    }

    if local.starts_with('.') {
        return Err(EmailError::InvalidLocalPart(
            "it cannot start with a period".to_string(),
        ));
    }
    if local.ends_with('.') {
        return Err(EmailError::InvalidLocalPart(
            "it cannot end with a period".to_string(),
        ));
    }
    if local.contains("..") {
        return Err(EmailError::InvalidLocalPart(
            "two periods cannot occur in a row".to_string(),
        ));
    }

    if let Some(bad) = local.chars().find(|&c| c != '.' && !is_atext(c)) {
        return Err(EmailError::InvalidLocalPart(format!(
            "the character {:?} is not allowed",
            bad
        )));
    }

    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailError> {
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(EmailError::DomainTooLong(domain.len()));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(EmailError::InvalidDomain(
            "it must contain a period".to_string(),
        ));
    }

    for label in &labels {
        if label.is_empty() {
            return Err(EmailError::InvalidDomain(
                "a period cannot start, end or repeat".to_string(),
            ));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EmailError::InvalidDomain(format!(
                "the label {:?} is longer than 63 characters",
                label
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(EmailError::InvalidDomain(format!(
                "the label {:?} cannot start or end with a hyphen",
                label
            )));
        }
        if let Some(bad) = label
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(EmailError::InvalidDomain(format!(
                "the character {:?} is not allowed",
                bad
            )));
        }
    }

    // labels.len() >= 2 checked above
    let tld = labels[labels.len() - 1];
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(EmailError::InvalidDomain(
            "the top-level domain cannot be numeric".to_string(),
        ));
    }

    Ok(())
}
