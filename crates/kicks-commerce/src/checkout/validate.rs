//! Checkout form field validation.
//!
//! Pure and re-runnable against partial or full form data: each rule set
//! checks its fields fail-fast per field, collects every failing field, and
//! reports a human-readable message per failure. Nothing here mutates state.

use crate::checkout::CheckoutForm;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region codes the storefront ships to.
pub const STATE_CODES: [&str; 10] = ["ny", "ca", "tx", "fl", "il", "pa", "oh", "ga", "nc", "mi"];

/// A checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Address,
    City,
    State,
    ZipCode,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::ZipCode => "zip_code",
            Field::CardNumber => "card_number",
            Field::ExpiryDate => "expiry_date",
            Field::Cvv => "cvv",
        }
    }
}

/// A failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

/// Validate the contact fields. Returns every failing field.
pub fn validate_contact(form: &CheckoutForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !valid_email(&form.email) {
        errors.push(FieldError::new(
            Field::Email,
            "Please enter a valid email address",
        ));
    }
    if form.first_name.chars().count() < 2 {
        errors.push(FieldError::new(
            Field::FirstName,
            "First name must be at least 2 characters",
        ));
    }
    if form.last_name.chars().count() < 2 {
        errors.push(FieldError::new(
            Field::LastName,
            "Last name must be at least 2 characters",
        ));
    }
    if form.address.chars().count() < 5 {
        errors.push(FieldError::new(
            Field::Address,
            "Address must be at least 5 characters",
        ));
    }
    if form.city.chars().count() < 2 {
        errors.push(FieldError::new(
            Field::City,
            "City must be at least 2 characters",
        ));
    }
    if !STATE_CODES.contains(&form.state.as_str()) {
        errors.push(FieldError::new(Field::State, "Please select a state"));
    }
    if form.zip_code.chars().count() < 5 {
        errors.push(FieldError::new(
            Field::ZipCode,
            "ZIP code must be at least 5 characters",
        ));
    }

    errors
}

/// Validate the payment fields against the current time.
pub fn validate_payment(form: &CheckoutForm) -> Vec<FieldError> {
    validate_payment_at(form, Utc::now())
}

/// Validate the payment fields against an explicit evaluation instant.
pub fn validate_payment_at(form: &CheckoutForm, now: DateTime<Utc>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(message) = card_number_error(&form.card_number) {
        errors.push(FieldError::new(Field::CardNumber, message));
    }
    if let Some(message) = expiry_error(&form.expiry_date, now) {
        errors.push(FieldError::new(Field::ExpiryDate, message));
    }
    if let Some(message) = cvv_error(&form.cvv) {
        errors.push(FieldError::new(Field::Cvv, message));
    }

    errors
}

/// Validate the whole form at once.
pub fn validate_all_at(form: &CheckoutForm, now: DateTime<Utc>) -> Vec<FieldError> {
    let mut errors = validate_contact(form);
    errors.extend(validate_payment_at(form, now));
    errors
}

/// Luhn checksum over a digit string: double every second digit from the
/// right, subtract 9 from doubled values over 9, and require the sum to be
/// a multiple of 10. Non-digits fail the check.
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0u32;
    let mut double = false;
    for ch in digits.chars().rev() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }
    sum % 10 == 0
}

fn card_number_error(value: &str) -> Option<&'static str> {
    if value.chars().count() < 19 {
        return Some("Please enter a complete card number");
    }
    let groups: Vec<&str> = value.split(' ').collect();
    let well_formed = groups.len() == 4
        && groups
            .iter()
            .all(|g| g.len() == 4 && g.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return Some("Card number must be in format: 1234 5678 9012 3456");
    }
    if !luhn_check(&groups.concat()) {
        return Some("Please enter a valid card number");
    }
    None
}

fn expiry_error(value: &str, now: DateTime<Utc>) -> Option<&'static str> {
    let Some((month, year)) = parse_expiry(value) else {
        return Some("Expiry date must be in MM/YY format");
    };
    // Refused from the first day of the expiry month: only a month strictly
    // ahead of the evaluation date is accepted.
    let live = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_month| now.date_naive() < first_of_month)
        .unwrap_or(false);
    if !live {
        return Some("Card has expired");
    }
    None
}

fn parse_expiry(value: &str) -> Option<(u32, i32)> {
    let (mm, yy) = value.split_once('/')?;
    if mm.len() != 2 || yy.len() != 2 {
        return None;
    }
    if !mm.chars().all(|c| c.is_ascii_digit()) || !yy.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let month: u32 = mm.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let year: i32 = yy.parse().ok()?;
    Some((month, 2000 + year))
}

fn cvv_error(value: &str) -> Option<&'static str> {
    let len = value.chars().count();
    if len < 3 {
        return Some("CVV must be at least 3 digits");
    }
    if len > 4 {
        return Some("CVV must be at most 4 digits");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("CVV must contain only numbers");
    }
    None
}

fn valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > 254 || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
