//! Cart error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Storage error: {0}")]
    Storage(#[from] basket_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line item quantity cannot be zero")]
    ZeroQuantity,
}
