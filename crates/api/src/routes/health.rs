//! `GET /health`: liveness plus the state of the books store.
//!
//! Healthy means the database answers and the `books` table created at
//! startup is present. Anything else is reported as `503 degraded` so a
//! load balancer stops routing to this instance.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use bookshelf_db::repositories::BookRepo;
use bookshelf_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: StoreHealth,
}

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub reachable: bool,
    pub books_table: bool,
    /// Absent unless the table could be counted.
    pub book_count: Option<i64>,
}

impl StoreHealth {
    fn is_healthy(&self) -> bool {
        self.reachable && self.books_table
    }
}

async fn check_store(pool: &DbPool) -> StoreHealth {
    match bookshelf_db::books_table_exists(pool).await {
        Ok(true) => StoreHealth {
            reachable: true,
            books_table: true,
            book_count: BookRepo::count(pool).await.ok(),
        },
        Ok(false) => {
            tracing::warn!("books table missing");
            StoreHealth {
                reachable: true,
                books_table: false,
                book_count: None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Database unreachable during health check");
            StoreHealth {
                reachable: false,
                books_table: false,
                book_count: None,
            }
        }
    }
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_store(&state.pool).await;
    let (code, status) = if database.is_healthy() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
