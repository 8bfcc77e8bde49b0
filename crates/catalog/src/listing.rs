//! Listing state: catalog, filters, sort order, pagination and cart.
//!
//! Every filter or sort change re-derives the result set and returns to the
//! first page; "load more" only grows the visible slice.

use core::num::NonZeroUsize;

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::cart::Cart;
use crate::facets::Facets;
use crate::filter::FilterState;
use crate::pagination::Pagination;
use crate::product::Product;
use crate::sort::SortOrder;
use crate::store::CatalogStore;

#[derive(Debug, Clone)]
pub struct Listing {
    store: CatalogStore,
    facets: Facets,
    filters: FilterState,
    sort: SortOrder,
    pagination: Pagination,
    cart: Cart,
}

impl Listing {
    /// Start a listing over `products`, ordered by the default sort order.
    pub fn new(products: Vec<Product>, page_size: NonZeroUsize) -> Self {
        let facets = Facets::from_catalog(&products);
        let mut listing = Self {
            store: CatalogStore::new(products),
            facets,
            filters: FilterState::new(),
            sort: SortOrder::default(),
            pagination: Pagination::new(page_size),
            cart: Cart::new(),
        };
        listing.refresh();
        listing
    }

    pub fn catalog(&self) -> &[Product] {
        self.store.products()
    }

    pub fn results(&self) -> &[Product] {
        self.store.results()
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The slice of the result set currently on display.
    pub fn visible(&self) -> &[Product] {
        let results = self.store.results();
        &results[..self.pagination.visible_count(results.len())]
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more(self.store.results().len())
    }

    pub fn set_color(&mut self, color: &str, selected: bool) {
        self.filters.set_color(color, selected);
        self.refresh();
    }

    /// Flip a size selection. Returns whether the size is selected afterwards.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        let selected = self.filters.toggle_size(size);
        self.refresh();
        selected
    }

    pub fn set_price_token(&mut self, token: Option<&str>) {
        self.filters.set_price_token(token);
        self.refresh();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort = order;
        self.refresh();
    }

    pub fn load_more(&mut self) {
        self.pagination.advance();
    }

    /// Append the catalog product with `id` to the cart. Returns the new cart
    /// size, or `NotFound` for an id the catalog does not know.
    pub fn add_to_cart(&mut self, id: &ProductId) -> DomainResult<usize> {
        let product = self
            .store
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let count = self.cart.add(product);
        tracing::info!(product_id = %id, cart_size = count, "added product to cart");
        Ok(count)
    }

    fn refresh(&mut self) {
        let len = self.store.refresh(&self.filters, self.sort);
        self.pagination.reset();
        tracing::debug!(
            colors = self.filters.colors().len(),
            sizes = self.filters.sizes().len(),
            price = self.filters.price_range().map(|r| r.token()).unwrap_or(""),
            sort = %self.sort,
            results = len,
            "derived result set"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn products() -> Vec<Product> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..10)
            .map(|i| {
                let color = if i < 3 { "red" } else { "blue" };
                Product::new(ProductId::new(format!("p{i}")), format!("Item {i}"), 10.0 * (i + 1) as f64)
                    .with_color(color)
                    .with_sizes(["M"])
                    .with_date(base + Duration::days(i))
            })
            .collect()
    }

    fn listing() -> Listing {
        Listing::new(products(), NonZeroUsize::new(9).unwrap())
    }

    #[test]
    fn first_page_shows_nine_of_ten() {
        let mut listing = listing();
        assert_eq!(listing.visible().len(), 9);
        assert!(listing.has_more());

        listing.load_more();
        assert_eq!(listing.pagination().page(), 2);
        assert_eq!(listing.visible().len(), 10);
        assert!(!listing.has_more());
    }

    #[test]
    fn initial_results_are_most_recent_first() {
        let listing = listing();
        assert_eq!(listing.sort_order(), SortOrder::MostRecent);
        assert_eq!(listing.results()[0].name(), "Item 9");
    }

    #[test]
    fn color_filter_narrows_to_three() {
        let mut listing = listing();
        listing.set_color("red", true);
        assert_eq!(listing.results().len(), 3);
        assert!(!listing.has_more());

        listing.set_color("red", false);
        assert_eq!(listing.results().len(), 10);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut listing = listing();
        listing.load_more();
        assert_eq!(listing.pagination().page(), 2);

        listing.set_price_token(Some("50-"));
        assert_eq!(listing.pagination().page(), 1);
        assert_eq!(listing.results().len(), 6);

        listing.load_more();
        listing.toggle_size("M");
        assert_eq!(listing.pagination().page(), 1);
    }

    #[test]
    fn sort_change_resets_to_first_page() {
        let mut listing = listing();
        listing.load_more();
        listing.set_sort_order(SortOrder::PriceAscending);
        assert_eq!(listing.pagination().page(), 1);
        assert_eq!(listing.results()[0].name(), "Item 0");
    }

    #[test]
    fn add_to_cart_appends_known_product() {
        let mut listing = listing();
        assert_eq!(listing.add_to_cart(&ProductId::new("p4")), Ok(1));
        assert_eq!(listing.add_to_cart(&ProductId::new("p4")), Ok(2));
        assert_eq!(listing.cart().len(), 2);
    }

    #[test]
    fn add_to_cart_rejects_unknown_product() {
        let mut listing = listing();
        let err = listing.add_to_cart(&ProductId::new("nope")).unwrap_err();
        match err {
            DomainError::NotFound(_) => {}
            other => panic!("Expected NotFound, got {other:?}"),
        }
        assert!(listing.cart().is_empty());
    }

    #[test]
    fn facets_come_from_full_catalog() {
        let mut listing = listing();
        listing.set_color("red", true);
        assert_eq!(listing.facets().colors, ["red", "blue"]);
        assert_eq!(listing.facets().sizes, ["M"]);
    }
}
