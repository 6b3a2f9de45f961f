//! Shopify API response types for the public `products.json` endpoint.
//!
//! Only the fields the extraction pipeline consumes are modeled; serde
//! ignores the rest of the payload. Fields the mapping requires (`id`,
//! `title`, `vendor`, `product_type`, `handle`) are mandatory here on
//! purpose: a feed entry missing one of them is a malformed payload, and the
//! catalog fetch is all-or-nothing.

use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ShopifyProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

/// A single product from the Shopify storefront feed.
#[derive(Debug, Deserialize)]
pub struct ShopifyProduct {
    /// Shopify numeric product ID (e.g., `6789012345678`).
    pub id: i64,

    /// Display name of the product.
    pub title: String,

    /// Vendor / brand name as configured in Shopify.
    pub vendor: String,

    /// Product category string; may be empty (`""`).
    pub product_type: String,

    /// URL slug for the product page (e.g., `"trail-shoe"`).
    pub handle: String,

    /// All purchasable variants. Shopify always sends this array, but an
    /// empty one is tolerated: the product then carries a zero price.
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

/// A single purchasable variant of a [`ShopifyProduct`].
///
/// Only the price matters to this pipeline; the first listed variant is
/// taken as the storefront-representative one.
#[derive(Debug, Deserialize)]
pub struct ShopifyVariant {
    /// Current price as a decimal string (e.g., `"19.99"`). Shopify always
    /// sets it, but absence is tolerated and treated as a zero price.
    #[serde(default)]
    pub price: Option<String>,
}
