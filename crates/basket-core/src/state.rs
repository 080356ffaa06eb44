//! Shared application handle

use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::App;
use crate::error::CoreError;
use crate::Result;

/// Hands the single `App` to consumers. A consumer arriving before the
/// app is attached gets an explicit error instead of a panic.
#[derive(Clone, Default)]
pub struct AppState {
    app: Arc<RwLock<Option<App>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the application instance built at startup.
    pub fn attach(&self, app: App) {
        *self.app.write() = Some(app);
    }

    pub fn with_app<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&App) -> Result<T>,
    {
        let guard = self.app.read();
        match guard.as_ref() {
            Some(app) => f(app),
            None => Err(CoreError::NotInitialized),
        }
    }
}
