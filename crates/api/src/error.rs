use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_core::error::CoreError;
use serde_json::{json, Value};
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "detail": ..., "code": ... }`. Field-level
/// failures (body fields and the `{id}` path segment alike) carry `detail`
/// as an array of `{ "field", "code", "message" }` entries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any store failure. Logged, never shown to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// One or more body fields are missing, mistyped, or break a field rule.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The body is not JSON at all, or not declared as JSON.
    #[error(transparent)]
    JsonBody(#[from] JsonRejection),

    /// The `{id}` path segment is not an integer.
    #[error(transparent)]
    PathParam(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", json!(core.to_string()))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    json!("An internal error occurred"),
                )
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                validation_detail(errors),
            ),
            AppError::PathParam(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                json!([field_entry("id", "type", &rejection.body_text())]),
            ),
            AppError::JsonBody(rejection) => {
                let status = rejection.status();
                let code = match status {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    _ => "BAD_REQUEST",
                };
                (status, code, json!(rejection.body_text()))
            }
        };

        let body = json!({
            "detail": detail,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn field_entry(field: &str, code: &str, message: &str) -> Value {
    json!({
        "field": field,
        "code": code,
        "message": message,
    })
}

/// Flatten field errors into `[{ "field", "code", "message" }]`, sorted by field.
fn validation_detail(errors: &ValidationErrors) -> Value {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<Value> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err.message.as_deref().unwrap_or_default();
                field_entry(&field, &err.code, message)
            })
        })
        .collect();
    Value::Array(entries)
}
