//! Sort order of the result set.

use core::cmp::Ordering;
use core::str::FromStr;

use storefront_core::{DomainError, ValueObject};

use crate::product::Product;

/// Ordering applied after filtering. Ties keep catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    MostRecent,
    PriceAscending,
    PriceDescending,
}

impl ValueObject for SortOrder {}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::MostRecent,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    /// Token used by the sort controls' `data-value` attributes.
    pub fn token(&self) -> &'static str {
        match self {
            SortOrder::MostRecent => "mais-recentes",
            SortOrder::PriceAscending => "menor-preco",
            SortOrder::PriceDescending => "maior-preco",
        }
    }

    /// Lenient parse for tokens read from markup: unknown or missing tokens
    /// fall back to [`SortOrder::MostRecent`].
    pub fn from_token_or_default(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::MostRecent => b.date().cmp(&a.date()),
            SortOrder::PriceAscending => a.price().total_cmp(&b.price()),
            SortOrder::PriceDescending => b.price().total_cmp(&a.price()),
        }
    }
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.token() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort order: {s}")))
    }
}
