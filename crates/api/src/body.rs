//! Request body decoding.
//!
//! Handlers take the body as a raw [`serde_json::Value`], check it against
//! the DTO's declared fields, then deserialize. Shape failures come back as
//! [`ValidationErrors`] so they share the 422 format of the field rules.

use std::borrow::Cow;

use bookshelf_core::shape::{check_fields, FieldSpec, BODY_FIELD};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Decode `body` into `T`, reporting every field that does not match `fields`.
pub fn parse_body<T: DeserializeOwned>(
    body: Value,
    fields: &[FieldSpec],
) -> Result<T, ValidationErrors> {
    check_fields(&body, fields)?;
    serde_json::from_value(body).map_err(|err| {
        let mut error = ValidationError::new("type");
        error.message = Some(Cow::Owned(err.to_string()));
        let mut errors = ValidationErrors::new();
        errors.add(BODY_FIELD, error);
        errors
    })
}
