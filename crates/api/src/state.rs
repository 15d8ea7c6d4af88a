/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds the store handle built at startup; cloning it clones the pool's
/// internal `Arc`, so every request shares one pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: bookshelf_db::DbPool,
}
