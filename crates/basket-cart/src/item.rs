//! Cart line items

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Product descriptor as the catalog hands it over.
///
/// Quantity-free: quantity belongs to the cart line, not the product.
/// Price is opaque here; the cart performs no currency math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier, unique within the cart
    pub id: String,
    /// Display name
    pub title: String,
    /// Display image reference
    pub image_url: String,
    /// Unit price
    pub price: f64,
}

/// One product currently in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// The product this line carries
    pub product: Product,
    /// Invariant: never zero. A line that would reach zero is removed.
    quantity: u32,
}

impl LineItem {
    /// A freshly added product starts at one unit.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub(crate) fn with_quantity(product: Product, quantity: u32) -> crate::Result<Self> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        Ok(Self { product, quantity })
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Re-add of a product already in the cart: one more unit, and the
    /// incoming descriptor fields replace the stored ones.
    pub(crate) fn merge(&mut self, product: Product) {
        self.product = product;
        self.quantity += 1;
    }

    pub(crate) fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Only valid above one unit; the store removes the line instead of
    /// letting quantity reach zero.
    pub(crate) fn decrement(&mut self) {
        debug_assert!(self.quantity > 1);
        self.quantity -= 1;
    }
}
