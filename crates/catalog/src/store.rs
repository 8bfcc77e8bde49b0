//! Catalog store: the full catalog plus the current result set.

use std::collections::HashSet;

use storefront_core::{Entity, ProductId};

use crate::filter::FilterState;
use crate::product::Product;
use crate::result_set::derive_result_set;
use crate::sort::SortOrder;

/// Holds the catalog loaded at startup and the currently derived result set.
///
/// The catalog itself never changes after construction; only the result set
/// is recomputed.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    results: Vec<Product>,
}

impl CatalogStore {
    /// Build a store whose result set is the unfiltered catalog in the given
    /// order.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id()) {
                tracing::warn!(product_id = %product.id(), "duplicate product id in catalog; lookups resolve to the first");
            }
        }

        let results = products.clone();
        Self { products, results }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// Find a catalog product by id (first match).
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    /// Recompute the result set. Returns its length.
    pub fn refresh(&mut self, filters: &FilterState, order: SortOrder) -> usize {
        self.results = derive_result_set(&self.products, filters, order);
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            Product::new(ProductId::new("1"), "A", 30.0).with_color("Azul"),
            Product::new(ProductId::new("2"), "B", 10.0).with_color("Preto"),
            Product::new(ProductId::new("3"), "C", 20.0).with_color("Azul"),
        ])
    }

    #[test]
    fn find_returns_catalog_product() {
        let store = store();
        assert_eq!(store.find(&ProductId::new("2")).map(Product::name), Some("B"));
        assert!(store.find(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn refresh_replaces_results_but_not_catalog() {
        let mut store = store();
        let len = store.refresh(&FilterState::new().with_color("Azul"), SortOrder::PriceAscending);
        assert_eq!(len, 2);
        let names: Vec<&str> = store.results().iter().map(Product::name).collect();
        assert_eq!(names, ["C", "A"]);
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_entry() {
        let store = CatalogStore::new(vec![
            Product::new(ProductId::new("1"), "First", 1.0),
            Product::new(ProductId::new("1"), "Second", 2.0),
        ]);
        assert_eq!(store.find(&ProductId::new("1")).map(Product::name), Some("First"));
    }
}
