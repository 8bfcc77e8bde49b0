use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::{Entity, ProductId, ValueObject};

/// Installment plan offered for a product: `count` payments of `amount`.
///
/// On the wire this is a two-element array `[count, amount]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(u32, f64)", into = "(u32, f64)")]
pub struct Installments {
    pub count: u32,
    pub amount: f64,
}

impl ValueObject for Installments {}

impl From<(u32, f64)> for Installments {
    fn from((count, amount): (u32, f64)) -> Self {
        Self { count, amount }
    }
}

impl From<Installments> for (u32, f64) {
    fn from(value: Installments) -> Self {
        (value.count, value.amount)
    }
}

/// A catalog product, as supplied by the product service.
///
/// Products are read-only once loaded; the listing only filters, orders and
/// references them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    color: String,
    #[serde(rename = "size", default)]
    sizes: Vec<String>,
    image: String,
    #[serde(deserialize_with = "deserialize_date")]
    date: DateTime<Utc>,
    #[serde(rename = "parcelamento")]
    installments: Installments,
}

impl Product {
    /// Build a product with the given identity and price.
    ///
    /// Remaining attributes start blank (no color, no sizes, epoch date, a
    /// single installment of the full price) and are set with the `with_*`
    /// builders.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            color: String::new(),
            sizes: Vec::new(),
            image: String::new(),
            date: DateTime::<Utc>::default(),
            installments: Installments {
                count: 1,
                amount: price,
            },
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_installments(mut self, installments: Installments) -> Self {
        self.installments = installments;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn installments(&self) -> Installments {
        self.installments
    }

    /// True if at least one of this product's sizes is in `selected`.
    pub fn has_any_size(&self, selected: &BTreeSet<String>) -> bool {
        self.sizes.iter().any(|s| selected.contains(s))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` or
/// `YYYY-MM-DD HH:MM:SS` (read as UTC) and plain `YYYY-MM-DD` dates (midnight
/// UTC).
///
/// A date that matches none of these does not reject the product: it is kept
/// with the epoch date and sorts last under most-recent.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_date(&raw).unwrap_or_else(|| {
        tracing::warn!(date = %raw, "unrecognized product date; using epoch");
        DateTime::<Utc>::default()
    }))
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
