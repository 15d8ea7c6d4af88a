//! Domain types, errors, and field rules shared by the bookshelf crates.
//!
//! Nothing in here knows about HTTP or the store; the `db` crate builds its
//! DTO validation on top of [`validation`] and the `api` crate maps
//! [`error::CoreError`] onto responses.

pub mod error;
pub mod patch;
pub mod shape;
pub mod types;
pub mod validation;
