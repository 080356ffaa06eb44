//! Basket Storage Layer
//!
//! SQLite-backed key-value persistence for application state.
//! Callers see an opaque get/set store; absent keys are `None`.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
