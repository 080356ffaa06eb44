//! Cart store
//!
//! Holds the canonical in-memory cart and keeps a serialized copy in the
//! key-value store. Mutations update memory synchronously and bump a
//! generation counter; a single background writer wakes on the counter,
//! snapshots whatever the state is by then, and persists it. Writes are
//! therefore serialized and always carry the newest state, and callers
//! never wait on storage.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use basket_storage::Database;

use crate::item::{LineItem, Product};
use crate::record::LineItemRecord;
use crate::Result;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart.items";

pub struct CartStore {
    /// Canonical in-memory cart state, in insertion order
    items: Arc<RwLock<Vec<LineItem>>>,
    /// Database for persistence
    db: Database,
    /// Generation of the newest mutation
    dirty_tx: Arc<watch::Sender<u64>>,
    /// Generation last persisted by the writer
    saved_rx: watch::Receiver<u64>,
    /// Set once the startup restore has run
    loaded: Arc<AtomicBool>,
}

impl CartStore {
    /// Create an empty store and spawn its autosave writer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(db: Database) -> Self {
        let items = Arc::new(RwLock::new(Vec::new()));
        let (dirty_tx, dirty_rx) = watch::channel(0u64);
        let (saved_tx, saved_rx) = watch::channel(0u64);

        spawn_autosave(Arc::clone(&items), db.clone(), dirty_rx, saved_tx);

        Self {
            items,
            db,
            dirty_tx: Arc::new(dirty_tx),
            saved_rx,
            loaded: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Restore the cart from storage.
    ///
    /// Runs at most once per store; later calls are no-ops. A missing
    /// record, a failed read, bad JSON, or a record with quantity zero
    /// all leave the cart empty. Never retried.
    pub fn load(&self) {
        if self.loaded.swap(true, Ordering::SeqCst) {
            return;
        }

        let stored = match self.db.get_value(CART_STORAGE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved cart, starting empty");
                return;
            }
        };

        match parse_items(&stored) {
            Ok(restored) => {
                let count = restored.len();
                *self.items.write() = restored;
                tracing::info!(line_items = count, "Restored cart from storage");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved cart is unreadable, starting empty");
            }
        }
    }

    /// Put one unit of a product in the cart.
    ///
    /// A product already in the cart gains a unit and takes the incoming
    /// descriptor fields; a new product is appended with quantity 1.
    /// Re-adding is defined behavior, not an error.
    pub fn add(&self, product: Product) {
        {
            let mut items = self.items.write();
            match items.iter_mut().find(|item| item.id() == product.id) {
                Some(item) => {
                    item.merge(product);
                    tracing::debug!(
                        product_id = %item.id(),
                        quantity = item.quantity(),
                        "Added another unit to cart"
                    );
                }
                None => {
                    tracing::debug!(product_id = %product.id, "Added product to cart");
                    items.push(LineItem::new(product));
                }
            }
        }

        self.mark_dirty();
    }

    /// Add one unit of a product already in the cart.
    ///
    /// An id not in the cart changes nothing, and no write is issued.
    pub fn increment(&self, id: &str) {
        {
            let mut items = self.items.write();
            let item = match items.iter_mut().find(|item| item.id() == id) {
                Some(item) => item,
                None => {
                    tracing::debug!(product_id = %id, "Increment for product not in cart, ignoring");
                    return;
                }
            };

            item.increment();
            tracing::debug!(product_id = %id, quantity = item.quantity(), "Incremented quantity");
        }

        self.mark_dirty();
    }

    /// Remove one unit of a product; the line disappears with the last
    /// unit. An id not in the cart changes nothing, and no write is
    /// issued.
    pub fn decrement(&self, id: &str) {
        {
            let mut items = self.items.write();
            let index = match items.iter().position(|item| item.id() == id) {
                Some(index) => index,
                None => {
                    tracing::debug!(product_id = %id, "Decrement for product not in cart, ignoring");
                    return;
                }
            };

            if items[index].quantity() == 1 {
                let removed = items.remove(index);
                tracing::debug!(product_id = %removed.id(), "Removed product from cart");
            } else {
                items[index].decrement();
                tracing::debug!(
                    product_id = %id,
                    quantity = items[index].quantity(),
                    "Decremented quantity"
                );
            }
        }

        self.mark_dirty();
    }

    /// Current cart contents, in insertion order.
    pub fn products(&self) -> Vec<LineItem> {
        self.items.read().clone()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Wait until every mutation issued so far has been persisted.
    ///
    /// Mutations are fire-and-forget; this exists for shutdown paths and
    /// tests.
    pub async fn flush(&self) {
        let target = *self.dirty_tx.borrow();
        let mut saved = self.saved_rx.clone();
        while *saved.borrow_and_update() < target {
            if saved.changed().await.is_err() {
                return;
            }
        }
    }

    fn mark_dirty(&self) {
        self.dirty_tx.send_modify(|generation| *generation += 1);
    }
}

impl Clone for CartStore {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            db: self.db.clone(),
            dirty_tx: Arc::clone(&self.dirty_tx),
            saved_rx: self.saved_rx.clone(),
            loaded: Arc::clone(&self.loaded),
        }
    }
}

fn parse_items(json: &str) -> Result<Vec<LineItem>> {
    let records: Vec<LineItemRecord> = serde_json::from_str(json)?;
    records.into_iter().map(LineItem::try_from).collect()
}

/// Single-writer autosave task. Wakes when the dirty generation moves,
/// persists a snapshot of the current state, and reports the generation
/// it observed. The watch channel coalesces bursts, so a run of quick
/// mutations ends in one write carrying the final state.
fn spawn_autosave(
    items: Arc<RwLock<Vec<LineItem>>>,
    db: Database,
    mut dirty_rx: watch::Receiver<u64>,
    saved_tx: watch::Sender<u64>,
) {
    tokio::spawn(async move {
        while dirty_rx.changed().await.is_ok() {
            let generation = *dirty_rx.borrow_and_update();

            // Snapshot after observing the generation: the write carries
            // at least the state of that mutation.
            let records: Vec<LineItemRecord> =
                items.read().iter().map(LineItemRecord::from).collect();

            let db = db.clone();
            let written = tokio::task::spawn_blocking(move || -> Result<()> {
                let json = serde_json::to_string(&records)?;
                db.set_value(CART_STORAGE_KEY, &json)?;
                Ok(())
            })
            .await;

            // A failed write is not retried; memory stays authoritative.
            match written {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "Failed to persist cart");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Cart persistence task panicked");
                }
            }

            let _ = saved_tx.send(generation);
        }
    });
}
