//! Page configuration.
//!
//! Every field has a default matching the stock markup, so an empty JSON
//! object (or no configuration at all) yields a working page.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, DomainResult};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/products";
pub const DEFAULT_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Endpoint returning the product catalog as a JSON array.
    pub api_url: String,
    /// Products revealed per "load more" step.
    pub page_size: NonZeroUsize,
    pub currency: CurrencyFormat,
    /// Price brackets offered in the filter panels, in display order.
    pub price_brackets: Vec<PriceBracket>,
    /// Tracing filter used in the browser (native builds read `RUST_LOG`).
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            currency: CurrencyFormat::default(),
            price_brackets: PriceBracket::defaults(),
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> DomainResult<Self> {
        self.page_size = NonZeroUsize::new(page_size)
            .ok_or_else(|| DomainError::validation("page_size must be at least 1"))?;
        Ok(self)
    }

    /// Apply string overrides as read from markup attributes. `None` keeps
    /// the current value.
    pub fn with_overrides(
        self,
        api_url: Option<String>,
        page_size: Option<&str>,
    ) -> DomainResult<Self> {
        let config = match api_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => self.with_api_url(url.trim()),
            None => self,
        };
        match page_size {
            Some(raw) => {
                let size = raw.trim().parse::<usize>().map_err(|e| {
                    DomainError::validation(format!("page_size {raw:?} is not a number: {e}"))
                })?;
                config.with_page_size(size)
            }
            None => Ok(config),
        }
    }
}

/// Currency presentation: symbol and decimal separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Two-decimal amount with the configured separator, e.g. `"129,90"`.
    pub fn amount(&self, value: f64) -> String {
        let fixed = format!("{value:.2}");
        if self.decimal_separator == '.' {
            fixed
        } else {
            fixed.replacen('.', &self.decimal_separator.to_string(), 1)
        }
    }
}

/// A price filter option: the token fed to the price filter and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBracket {
    pub token: String,
    pub label: String,
}

impl PriceBracket {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }

    pub fn defaults() -> Vec<PriceBracket> {
        vec![
            PriceBracket::new("0-50", "de R$0 até R$50"),
            PriceBracket::new("51-150", "de R$51 até R$150"),
            PriceBracket::new("151-300", "de R$151 até R$300"),
            PriceBracket::new("301-500", "de R$301 até R$500"),
            PriceBracket::new("500-", "a partir de R$ 500"),
        ]
    }
}
