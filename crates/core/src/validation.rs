//! Field rules for book records.
//!
//! Each rule returns a [`ValidationError`] carrying a stable `code` and a
//! human-readable message; callers collect them per field into
//! `validator::ValidationErrors`.

use std::borrow::Cow;

use chrono::Datelike;
use validator::ValidationError;

/// Earliest accepted publication year.
pub const PUBLISHED_YEAR_MIN: i32 = 1000;

/// The current calendar year in UTC, used as the upper publication bound.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Reject empty or whitespace-only text.
pub fn validate_non_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be empty".into()));
    }
    Ok(())
}

/// Check that `year` falls within `[PUBLISHED_YEAR_MIN, current_year]`.
pub fn validate_published_year_against(
    year: i32,
    current_year: i32,
) -> Result<(), ValidationError> {
    if !(PUBLISHED_YEAR_MIN..=current_year).contains(&year) {
        let mut err = error(
            "range",
            format!("must be between {PUBLISHED_YEAR_MIN} and {current_year}, got {year}").into(),
        );
        err.add_param(Cow::from("min"), &PUBLISHED_YEAR_MIN);
        err.add_param(Cow::from("max"), &current_year);
        err.add_param(Cow::from("value"), &year);
        return Err(err);
    }
    Ok(())
}

/// [`validate_published_year_against`] using today's year.
pub fn validate_published_year(year: i32) -> Result<(), ValidationError> {
    validate_published_year_against(year, current_year())
}

/// Error for a non-nullable field that was sent as an explicit `null`.
pub fn null_not_allowed() -> ValidationError {
    error("null", "may not be null".into())
}

fn error(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message);
    err
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_boundary_years() {
        assert!(validate_published_year_against(1000, 2024).is_ok());
        assert!(validate_published_year_against(2024, 2024).is_ok());
    }

    #[test]
    fn rejects_year_before_minimum() {
        let err = validate_published_year_against(999, 2024).unwrap_err();
        assert_eq!(err.code, "range");
        assert_matches!(err.message.as_deref(), Some(m) if m.contains("999"));
    }

    #[test]
    fn rejects_year_after_current() {
        assert!(validate_published_year_against(2025, 2024).is_err());
    }

    #[test]
    fn current_year_is_accepted_today() {
        assert!(validate_published_year(current_year()).is_ok());
        assert!(validate_published_year(current_year() + 1).is_err());
    }

    #[test]
    fn rejects_blank_text() {
        assert!(validate_non_empty("").is_err());
        assert!(validate_non_empty("   ").is_err());
        assert!(validate_non_empty("Dune").is_ok());
    }
}
