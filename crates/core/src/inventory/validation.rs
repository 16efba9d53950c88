//! Pure input validation for item forms.

use chrono::NaiveDate;

use super::{ValidationError, DATE_FORMAT};

/// Parses an expiration date in `YYYY-MM-DD` form.
pub fn parse_expiration_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    // chrono accepts unpadded fields, so pin the shape before parsing
    let well_formed = trimmed.len() == 10
        && trimmed
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if !well_formed {
        return Err(ValidationError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Parses an optional expiration date. Blank input counts as absent.
pub fn parse_optional_expiration_date(
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_expiration_date(v).map(Some),
        _ => Ok(None),
    }
}

/// Unwraps a required form field, rejecting absent or blank values.
pub fn require(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Parses a required item id.
pub fn parse_item_id(value: Option<String>) -> Result<i64, ValidationError> {
    let raw = require(value, "item_id")?;
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidField {
            field: "item_id",
            value: raw,
        })
}
