//! Structural checks on a raw JSON body before it becomes a typed DTO.
//!
//! Serde stops at the first field it cannot deserialize. Walking the body
//! against the DTO's declared fields first lets every missing, null or
//! mistyped field be reported in one response.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// JSON type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// A whole number that fits in `i32`.
    Integer,
}

/// One declared field of a request body.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true, nullable: false }
    }

    /// May be omitted, but not sent as `null`.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false, nullable: false }
    }

    /// May be omitted or sent as `null`.
    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false, nullable: true }
    }
}

/// Field name used when the body as a whole is unusable.
pub const BODY_FIELD: &str = "body";

/// Check `body` against `fields`, collecting one error per offending field.
///
/// Keys not listed in `fields` are ignored.
pub fn check_fields(body: &Value, fields: &[FieldSpec]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(object) = body.as_object() else {
        errors.add(
            BODY_FIELD,
            error("type", format!("expected a JSON object, got {}", type_name(body)).into()),
        );
        return Err(errors);
    };

    for field in fields {
        let result = match object.get(field.name) {
            None if field.required => Err(error("missing", "field required".into())),
            None => Ok(()),
            Some(Value::Null) if field.nullable => Ok(()),
            Some(Value::Null) => Err(error("null", "may not be null".into())),
            Some(value) => check_kind(value, field.kind),
        };
        if let Err(err) = result {
            errors.add(field.name, err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_kind(value: &Value, kind: FieldKind) -> Result<(), ValidationError> {
    let ok = match kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Integer => value
            .as_i64()
            .is_some_and(|n| i32::try_from(n).is_ok()),
    };
    if ok {
        return Ok(());
    }
    let expected = match kind {
        FieldKind::Text => "a string",
        FieldKind::Integer => "a 32-bit integer",
    };
    Err(error(
        "type",
        format!("expected {expected}, got {}", type_name(value)).into(),
    ))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn error(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message);
    err
}
