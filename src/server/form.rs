//! Posted form values and validation.
//!
//! `Form` keeps every posted key/value pair in order and collects validation
//! errors per field. Pages read both back to refill inputs and show messages.

use std::collections::BTreeMap;

/// Validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// First error recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Posted form data with accumulated validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    values: Vec<(String, String)>,
    pub errors: FormErrors,
}

impl Form {
    /// Wraps posted pairs, as produced by `axum::Form<Vec<(String, String)>>`.
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    /// First value posted for `field`, or `""`.
    pub fn get(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Whether `field` was posted with a non-blank value.
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Names of every posted field, in posting order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(key, _)| key.as_str())
    }

    pub fn required(&mut self, fields: &[&str]) {
        for field in fields {
            if !self.has(field) {
                self.errors.add(field, "This field cannot be blank");
            }
        }
    }

    /// Checks that `field` is at least `length` characters long.
    pub fn min_length(&mut self, field: &str, length: usize) -> bool {
        if self.get(field).chars().count() < length {
            self.errors.add(
                field,
                format!("This field must be at least {} characters long", length),
            );
            return false;
        }
        true
    }

    pub fn is_email(&mut self, field: &str) {
        if !is_valid_email(self.get(field)) {
            self.errors.add(field, "Invalid email address");
        }
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted domain
/// without empty labels or whitespace.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
