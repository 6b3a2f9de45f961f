use serde::{Deserialize, Serialize};

/// A product from a storefront's public feed, in its canonical shape.
///
/// Constructed once from a feed entry and never mutated afterwards. The full
/// catalog owns its products in feed order; the hero subset holds clones of
/// qualifying catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Shopify numeric product ID, unique within one catalog.
    pub id: i64,
    /// Display name of the product.
    pub title: String,
    /// Vendor / brand name as configured in the storefront.
    pub vendor: String,
    /// Product category string; may be empty on stores that don't set one.
    pub product_type: String,
    /// Price of the storefront-default (first listed) variant. Non-negative;
    /// `0.0` when the feed entry carries no variant price.
    pub price: f64,
    /// Canonical storefront URL, e.g. `"https://example.com/products/shoe"`.
    pub url: String,
}
