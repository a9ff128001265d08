//! Add-patient form state and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::PatientRecord;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern compiles"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Per-field validation messages for one validation attempt.
///
/// Every attempt replaces the whole map; a field that passed has no entry.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl FieldErrors {
    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// State of the add-patient form: four text fields plus the error map from
/// the latest validation attempt.
#[derive(Debug, Clone, Default)]
pub struct AddPatientForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    errors: FieldErrors,
}

impl AddPatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors from the latest validation attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate all fields, replacing the error map wholesale.
    ///
    /// Returns true when every field passed.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required.".into());
        }
        if !is_valid_age(&self.age) {
            errors.age = Some("Enter a valid age.".into());
        }
        if !PHONE_RE.is_match(&self.phone) {
            errors.phone = Some("Phone must be 10 digits.".into());
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.email = Some("Enter a valid email address.".into());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, on success, synthesize the new record.
    ///
    /// The four fields are copied verbatim (age stays a string) with a
    /// fresh ms-timestamp id and the placeholder address city; the form and
    /// its errors are then reset. On failure returns `None` and leaves the
    /// field values in place so the user can correct them.
    pub fn submit(&mut self) -> Option<PatientRecord> {
        if !self.validate() {
            return None;
        }

        let record = PatientRecord::new_local(
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.age),
            std::mem::take(&mut self.phone),
            std::mem::take(&mut self.email),
        );
        self.errors = FieldErrors::default();
        Some(record)
    }
}

/// Age passes when it is a number greater than zero after trimming.
fn is_valid_age(age: &str) -> bool {
    let trimmed = age.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => value > 0.0,
        Err(_) => false,
    }
}
