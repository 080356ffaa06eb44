//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] basket_storage::StorageError),

    #[error("Cart error: {0}")]
    Cart(#[from] basket_cart::CartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Application not initialized")]
    NotInitialized,
}
