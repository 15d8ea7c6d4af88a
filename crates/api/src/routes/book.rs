//! Route definitions for the `/books` resource.

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Methods served under `/books`; CORS allows exactly these.
pub const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Routes for books.
///
/// ```text
/// GET    /books/        -> list
/// POST   /books/        -> create
/// GET    /books/{id}    -> get_by_id
/// PUT    /books/{id}    -> update
/// DELETE /books/{id}    -> delete
/// ```
///
/// The collection is also served without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(book::list).post(book::create))
        .route("/books/", get(book::list).post(book::create))
        .route(
            "/books/{id}",
            get(book::get_by_id).put(book::update).delete(book::delete),
        )
}
