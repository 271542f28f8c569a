//! Input validation for guest and reservation fields.

use std::fmt;

use chrono::{DateTime, NaiveDate};

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required value is absent or blank.
    Missing(&'static str),
    /// Phone number does not parse as a valid international number.
    InvalidPhone(String),
    /// Date is not in ISO format.
    InvalidDate { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => write!(f, "{} is missing", field),
            ValidationError::InvalidPhone(msg) => write!(f, "Invalid phone number: {}", msg),
            ValidationError::InvalidDate { field, value } => {
                write!(f, "{} is not an ISO date: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// How strictly phone numbers are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneValidation {
    /// Only require a non-blank value.
    PresenceOnly,
    /// Also require a valid number according to the numbering plan.
    #[default]
    Strict,
}

/// Validate a phone number.
///
/// In [`PhoneValidation::Strict`] mode the number must be in international
/// format (leading `+` and country code) and valid for its region; it is
/// returned in E.164 form so spacing differences map to the same guest.
/// [`PhoneValidation::PresenceOnly`] returns the input trimmed.
pub fn validate_phone(
    phone: Option<&str>,
    mode: PhoneValidation,
) -> Result<String, ValidationError> {
    let phone = phone.map(str::trim).unwrap_or_default();

    if phone.is_empty() {
        return Err(ValidationError::Missing("Phone"));
    }

    if mode == PhoneValidation::PresenceOnly {
        return Ok(phone.to_string());
    }

    let parsed = phonenumber::parse(None, phone)
        .map_err(|e| ValidationError::InvalidPhone(format!("{}: {}", phone, e)))?;

    if !phonenumber::is_valid(&parsed) {
        return Err(ValidationError::InvalidPhone(format!(
            "{}: not a valid number",
            phone
        )));
    }

    Ok(parsed.format().mode(phonenumber::Mode::E164).to_string())
}

/// Validate a guest name, returning it trimmed.
pub fn validate_name(name: Option<&str>) -> Result<String, ValidationError> {
    let name = name.map(str::trim).unwrap_or_default();

    if name.is_empty() {
        return Err(ValidationError::Missing("Name"));
    }

    Ok(name.to_string())
}

/// Parse a required date field.
///
/// Accepts `YYYY-MM-DD` as well as RFC 3339 timestamps, of which only the
/// date part is kept.
pub fn parse_date(field: &'static str, value: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
}
