//! Form field validation.
//!
//! One rule evaluator shared by every form: each check names a field,
//! carries a pass/fail verdict and the message to show on failure, and
//! [`evaluate`] folds a list of checks into per-field errors (first failing
//! check per field wins). All of this runs before any network call.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Field name → error message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// A single evaluated rule.
pub struct Check {
    pub field: &'static str,
    pub ok: bool,
    pub message: String,
}

impl Check {
    pub fn new(field: &'static str, ok: bool, message: impl Into<String>) -> Self {
        Self {
            field,
            ok,
            message: message.into(),
        }
    }
}

/// Fold checks into field errors, keeping the first failure per field.
pub fn evaluate(checks: impl IntoIterator<Item = Check>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for check in checks {
        if !check.ok && !errors.contains_key(check.field) {
            errors.insert(check.field, check.message);
        }
    }
    errors
}

/// Parse a user-entered decimal, tolerating surrounding whitespace.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// The field must be non-empty (ignoring whitespace).
pub fn required(field: &'static str, value: &str) -> Check {
    Check::new(field, !value.trim().is_empty(), "This field is required")
}

/// The field must parse as a number strictly greater than zero.
pub fn positive(field: &'static str, value: &str) -> Check {
    let ok = parse_decimal(value).is_some_and(|d| d > Decimal::ZERO);
    Check::new(field, ok, "Must be greater than 0")
}

/// The field must parse as a whole number strictly greater than zero.
pub fn positive_integer(field: &'static str, value: &str) -> Check {
    let ok = value.trim().parse::<u32>().is_ok_and(|n| n > 0);
    Check::new(field, ok, "Must be greater than 0")
}

/// Two fields must hold identical values.
pub fn matching(
    field: &'static str,
    value: &str,
    other: &str,
    message: impl Into<String>,
) -> Check {
    Check::new(field, value == other, message)
}

/// Letters and digits only — no whitespace or punctuation.
pub fn alphanumeric(field: &'static str, value: &str) -> Check {
    let ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric());
    Check::new(field, ok, "Only letters and numbers are allowed")
}
