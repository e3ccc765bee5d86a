use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};

use crate::domain::models;

use super::ApiError;

/// Presence check for a required text field. The stored value keeps its
/// original whitespace.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(
            field,
            format!("{field} must not be empty"),
        ));
    }
    Ok(value.to_string())
}

/// Blank optional fields collapse to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

pub(crate) fn parse_date_field(field: &'static str, value: &str) -> Result<Date, ApiError> {
    models::parse_date(value).map_err(|err| {
        ApiError::validation(field, format!("{field} must be a YYYY-MM-DD date: {err}"))
    })
}

pub(crate) fn parse_datetime_field(
    field: &'static str,
    value: &str,
) -> Result<OffsetDateTime, ApiError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| {
        ApiError::validation(
            field,
            format!("{field} must be an RFC 3339 timestamp: {err}"),
        )
    })
}
