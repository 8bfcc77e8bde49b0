//! Filter options offered to the shopper, derived from the full catalog.

use std::collections::BTreeSet;

use crate::product::Product;

/// Distinct colors and sizes present in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Colors in order of first appearance in the catalog.
    pub colors: Vec<String>,
    /// Sizes in ascending order.
    pub sizes: Vec<String>,
}

impl Facets {
    pub fn from_catalog(catalog: &[Product]) -> Self {
        let mut seen = BTreeSet::new();
        let colors = catalog
            .iter()
            .map(Product::color)
            .filter(|color| seen.insert(*color))
            .map(str::to_string)
            .collect();

        let sizes: BTreeSet<&str> = catalog
            .iter()
            .flat_map(|p| p.sizes().iter().map(String::as_str))
            .collect();

        Self {
            colors,
            sizes: sizes.into_iter().map(str::to_string).collect(),
        }
    }
}
