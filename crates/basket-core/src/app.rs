//! Application container
//!
//! One `App` is built at startup and owns the storage handle and the
//! cart store. Consumers receive it (or an `AppState` handle) explicitly
//! instead of reaching for a global.

use basket_cart::CartStore;
use basket_storage::Database;

use crate::config::Config;
use crate::Result;

pub struct App {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Cart store
    cart: CartStore,
}

impl App {
    /// Wire up storage and the cart store.
    ///
    /// Must be called from within a tokio runtime (the cart spawns its
    /// autosave writer).
    pub fn new(config: Config) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        let cart = CartStore::new(db.clone());

        Ok(Self { config, db, cart })
    }

    /// Restore persisted state. Runs once at startup.
    pub fn initialize(&self) {
        self.cart.load();

        tracing::info!(line_items = self.cart.len(), "Application state ready");
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            cart: self.cart.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_cart::Product;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            database_path: PathBuf::from(":memory:"),
        }
    }

    #[tokio::test]
    async fn test_app_wires_the_cart_to_storage() {
        let app = App::new(test_config()).unwrap();
        app.initialize();

        assert!(app.cart().is_empty());

        app.cart().add(Product {
            id: "sku-1".to_string(),
            title: "Enamel Mug".to_string(),
            image_url: "https://cdn.example/mug.png".to_string(),
            price: 12.5,
        });
        app.cart().flush().await;

        assert_eq!(app.cart().len(), 1);
        assert!(app
            .database()
            .get_value(basket_cart::CART_STORAGE_KEY)
            .unwrap()
            .is_some());
    }
}
