//! Repository layer: one zero-sized repo per table, taking the pool per call.

pub mod book_repo;

pub use book_repo::BookRepo;
