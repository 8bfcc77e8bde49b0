//! In-memory shopping cart.

use crate::product::Product;

/// Ordered list of products added to the cart.
///
/// Duplicates are kept as separate entries; there is no quantity
/// aggregation, no removal and no persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. Returns the new number of entries.
    pub fn add(&mut self, product: Product) -> usize {
        self.items.push(product);
        self.items.len()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
