//! Filter state: colors, sizes and a price range.
//!
//! Dimensions combine with AND; selections inside a dimension combine with OR.
//! An empty dimension places no constraint on the result.

use std::collections::BTreeSet;

use storefront_core::ValueObject;

use crate::product::Product;

/// Price constraint parsed from a bracket token such as `"50-100"` or `"500-"`.
///
/// Each side of the `-` is read as a number the way form values are: a blank
/// side counts as `0`. A missing, zero or non-numeric upper side leaves the
/// range open-ended. A non-numeric lower side yields a range nothing can
/// satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    token: String,
    min: Option<f64>,
    max: Option<f64>,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split('-');
        let min = parts.next().and_then(form_number);
        let max = parts
            .next()
            .and_then(form_number)
            .filter(|max| *max != 0.0);

        Self {
            token: token.to_string(),
            min,
            max,
        }
    }

    /// The bracket token this range was parsed from.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        let Some(min) = self.min else {
            return false;
        };
        match self.max {
            Some(max) => price >= min && price <= max,
            None => price >= min,
        }
    }
}

fn form_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// The active filter selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    colors: BTreeSet<String>,
    sizes: BTreeSet<String>,
    price_range: Option<PriceRange>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    pub fn sizes(&self) -> &BTreeSet<String> {
        &self.sizes
    }

    pub fn price_range(&self) -> Option<&PriceRange> {
        self.price_range.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price_range.is_none()
    }

    /// Add (`selected == true`) or remove a color.
    pub fn set_color(&mut self, color: &str, selected: bool) {
        if selected {
            self.colors.insert(color.to_string());
        } else {
            self.colors.remove(color);
        }
    }

    /// Flip a size selection. Returns whether the size is selected afterwards.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        if self.sizes.remove(size) {
            false
        } else {
            self.sizes.insert(size.to_string());
            true
        }
    }

    /// Set the price bracket token. `None` or an empty token clears it.
    pub fn set_price_token(&mut self, token: Option<&str>) {
        self.price_range = token
            .filter(|t| !t.is_empty())
            .map(PriceRange::parse);
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.set_color(color, true);
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.sizes.insert(size.to_string());
        self
    }

    pub fn with_price_token(mut self, token: &str) -> Self {
        self.set_price_token(Some(token));
        self
    }

    pub fn matches_color(&self, product: &Product) -> bool {
        self.colors.is_empty() || self.colors.contains(product.color())
    }

    pub fn matches_size(&self, product: &Product) -> bool {
        self.sizes.is_empty() || product.has_any_size(&self.sizes)
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range
            .as_ref()
            .is_none_or(|range| range.contains(product.price()))
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_color(product) && self.matches_size(product) && self.matches_price(product)
    }
}
