//! Catalog domain module.
//!
//! This crate contains the listing rules for the storefront: the product
//! model, filter and sort state, result-set derivation, pagination and the
//! in-memory cart. Everything here is deterministic domain logic (no IO, no
//! HTTP, no DOM).

pub mod cart;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod product;
pub mod result_set;
pub mod sort;
pub mod store;

pub use cart::Cart;
pub use facets::Facets;
pub use filter::{FilterState, PriceRange};
pub use listing::Listing;
pub use pagination::Pagination;
pub use product::{Installments, Product};
pub use result_set::derive_result_set;
pub use sort::SortOrder;
pub use store::CatalogStore;
