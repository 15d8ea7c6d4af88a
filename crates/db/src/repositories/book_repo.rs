//! Repository for the `books` table.

use bookshelf_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, published_year, summary";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List all books in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Number of stored books.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = ?1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new book, returning the created row with its assigned `id`.
    pub async fn create(pool: &SqlitePool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, published_year, summary)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.published_year)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// Update a book. Only fields present in `input` are applied.
    ///
    /// `summary` is cleared when sent as `null`; the other columns are
    /// non-nullable and keep their value unless a new one is given.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let summary_provided = input.summary.is_some();
        let summary_value = input.summary.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE books SET
                title          = COALESCE(?2, title),
                author         = COALESCE(?3, author),
                published_year = COALESCE(?4, published_year),
                summary        = CASE WHEN ?5 THEN ?6 ELSE summary END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(input.title.as_ref().and_then(|v| v.as_deref()))
            .bind(input.author.as_ref().and_then(|v| v.as_deref()))
            .bind(input.published_year.flatten())
            .bind(summary_provided)
            .bind(summary_value)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a book, returning the row as it was before removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("DELETE FROM books WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
