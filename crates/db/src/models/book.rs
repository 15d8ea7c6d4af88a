//! Book entity model and DTOs.
//!
//! The three shapes share one field set: [`CreateBook`] is the required
//! subset, [`UpdateBook`] the all-optional patch view and [`Book`] the
//! required subset plus the store-assigned `id`. Field rules come from
//! [`bookshelf_core::validation`] so every view checks the same way.

use bookshelf_core::patch::deserialize_some;
use bookshelf_core::shape::{FieldKind, FieldSpec};
use bookshelf_core::types::DbId;
use bookshelf_core::validation::{null_not_allowed, validate_non_empty, validate_published_year};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

/// A row from the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub summary: Option<String>,
}

/// DTO for creating a new book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub summary: Option<String>,
}

/// DTO for partially updating a book.
///
/// The outer `Option` records whether the key was sent at all, the inner one
/// whether it was `null`. Only `summary` may be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBook {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub published_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub summary: Option<Option<String>>,
}

impl CreateBook {
    /// Body fields, checked before deserializing so every bad field is reported.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("author", FieldKind::Text),
        FieldSpec::required("published_year", FieldKind::Integer),
        FieldSpec::nullable("summary", FieldKind::Text),
    ];
}

impl UpdateBook {
    /// Body fields; all may be omitted, only `summary` may be `null`.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("title", FieldKind::Text),
        FieldSpec::optional("author", FieldKind::Text),
        FieldSpec::optional("published_year", FieldKind::Integer),
        FieldSpec::nullable("summary", FieldKind::Text),
    ];
}

impl Validate for CreateBook {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        record(&mut errors, "title", validate_non_empty(&self.title));
        record(&mut errors, "author", validate_non_empty(&self.author));
        record(
            &mut errors,
            "published_year",
            validate_published_year(self.published_year),
        );
        finish(errors)
    }
}

impl Validate for UpdateBook {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.title {
            let result = title.as_deref().map_or(Err(null_not_allowed()), validate_non_empty);
            record(&mut errors, "title", result);
        }
        if let Some(author) = &self.author {
            let result = author.as_deref().map_or(Err(null_not_allowed()), validate_non_empty);
            record(&mut errors, "author", result);
        }
        if let Some(year) = self.published_year {
            let result = year.map_or(Err(null_not_allowed()), validate_published_year);
            record(&mut errors, "published_year", result);
        }
        finish(errors)
    }
}

fn record(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<(), ValidationError>,
) {
    if let Err(err) = result {
        errors.add(field, err);
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use bookshelf_core::validation::current_year;

    use super::*;

    fn create(year: i32) -> CreateBook {
        CreateBook {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            published_year: year,
            summary: None,
        }
    }

    fn update(json: serde_json::Value) -> UpdateBook {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn valid_create_passes() {
        assert!(create(1965).validate().is_ok());
    }

    #[test]
    fn create_reports_every_failing_field() {
        let input = CreateBook {
            title: "".into(),
            author: " ".into(),
            published_year: 999,
            summary: None,
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("published_year"));
    }

    #[test]
    fn create_rejects_future_year() {
        let errors = create(current_year() + 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("published_year"));
    }

    #[test]
    fn create_summary_is_optional_in_json() {
        let input: CreateBook = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "published_year": 1965
        }))
        .unwrap();
        assert_eq!(input.summary, None);
    }

    #[test]
    fn create_requires_title_in_json() {
        let result: Result<CreateBook, _> = serde_json::from_value(serde_json::json!({
            "author": "Frank Herbert",
            "published_year": 1965
        }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        let input = update(serde_json::json!({}));
        assert!(input.title.is_none());
        assert!(input.summary.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let input = update(serde_json::json!({ "summary": null }));
        assert_eq!(input.summary, Some(None));
        assert_eq!(input.title, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_rejects_null_for_required_columns() {
        let input = update(serde_json::json!({ "title": null, "published_year": null }));
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("published_year"));
        assert!(!fields.contains_key("author"));
    }

    #[test]
    fn field_specs_accept_what_the_dtos_deserialize() {
        use bookshelf_core::shape::check_fields;

        let create = serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "published_year": 1965,
            "summary": null
        });
        assert!(check_fields(&create, CreateBook::FIELDS).is_ok());
        assert!(serde_json::from_value::<CreateBook>(create).is_ok());

        let patch = serde_json::json!({ "summary": null });
        assert!(check_fields(&patch, UpdateBook::FIELDS).is_ok());
        assert!(check_fields(&patch, CreateBook::FIELDS).is_err());
    }

    #[test]
    fn update_checks_year_range() {
        let input = update(serde_json::json!({ "published_year": 500 }));
        assert!(input.validate().is_err());
    }
}
