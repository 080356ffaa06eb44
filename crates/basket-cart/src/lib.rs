//! Basket Cart Engine
//!
//! The cart store owns the canonical in-memory cart: an ordered list of
//! line items, restored once at startup and auto-persisted to local
//! storage after every mutation. Memory is authoritative; storage is a
//! best-effort copy that only matters at the next startup.

mod error;
mod item;
mod record;
mod store;

pub use error::CartError;
pub use item::{LineItem, Product};
pub use record::LineItemRecord;
pub use store::{CartStore, CART_STORAGE_KEY};

pub type Result<T> = std::result::Result<T, CartError>;
