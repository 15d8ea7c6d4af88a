//! Route tree:
//!
//! ```text
//! /health           service + store status
//! /books            list, create
//! /books/           list, create
//! /books/{id}       get, update, delete
//! ```

pub mod book;
pub mod health;
