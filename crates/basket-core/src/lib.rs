//! Basket Core
//!
//! Coordination layer: builds the application container once at startup
//! and hands it to every consumer explicitly. Rust owns all state; the
//! rendering layer is a stateless consumer of the cart surface.

mod app;
mod config;
mod error;
mod state;

pub use app::App;
pub use config::Config;
pub use error::CoreError;
pub use state::AppState;

// Re-export the cart and storage surface
pub use basket_cart::{CartError, CartStore, LineItem, LineItemRecord, Product};
pub use basket_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
