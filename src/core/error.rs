//! Errors raised while validating user input.
//!
//! Every variant aborts the operation before any state is touched.
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields (missing {0})")]
    MissingField(&'static str),
    #[error("Please enter a valid amount, got `{0}`")]
    InvalidAmount(String),
    #[error("Please enter a valid date (yyyy-mm-dd), got `{0}`")]
    InvalidDate(String),
    #[error("Unsupported currency `{0}`, expected one of INR, USD, EUR")]
    UnknownCurrency(String),
    #[error("Unknown theme `{0}`, expected light or dark")]
    UnknownTheme(String),
    #[error("Please enter a valid email address, got `{0}`")]
    InvalidEmail(String),
}

/// Parses a strictly positive number from user input.
pub fn parse_positive(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount(trimmed.to_string())),
    }
}

/// Parses an optional positive number where the literal `none` clears it.
pub fn parse_optional_positive(input: &str) -> Result<Option<f64>, ValidationError> {
    if input.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_positive(input).map(Some)
}

/// Checks that an email has the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(email.to_string()),
        _ => Err(invalid()),
    }
}
