//! Handlers for the `/books` resource.
//!
//! Bodies arrive as raw JSON and path ids as `Result<Path<_>, _>` so every
//! malformed request flows through [`AppError`] and gets the same JSON
//! error shape. Body shape and field rules are checked before the store
//! is touched.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_db::models::book::{Book, CreateBook, UpdateBook};
use bookshelf_db::repositories::BookRepo;
use serde_json::Value;
use validator::Validate;

use crate::body::parse_body;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Book", id })
}

/// GET /books/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = path?;
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(book))
}

/// POST /books/
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let Json(body) = body?;
    let input: CreateBook = parse_body(body, CreateBook::FIELDS)?;
    input.validate()?;

    let book = BookRepo::create(&state.pool, &input).await?;

    tracing::info!(book_id = book.id, title = %book.title, "Book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id}
///
/// Partial update: keys missing from the body keep their stored value.
/// An invalid body is rejected even when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = path?;
    let Json(body) = body?;
    let input: UpdateBook = parse_body(body, UpdateBook::FIELDS)?;
    input.validate()?;

    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(book_id = id, "Book updated");

    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    let removed = BookRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(book_id = id, title = %removed.title, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}
