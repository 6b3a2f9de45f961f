//! Product catalog retrieval and mapping from the public feed.

use storesight_core::Product;

use crate::client::{extract_store_origin, InsightsClient};
use crate::error::ScraperError;
use crate::types::ShopifyProduct;

/// Page size requested from the feed. Only the first page is fetched; stores
/// with more products than this silently expose only the first page. This is
/// a preserved scope limitation, not an oversight.
pub const FEED_PAGE_LIMIT: u32 = 250;

/// Fetches the store's product catalog, degrading every failure to an empty
/// catalog.
///
/// **All-or-nothing semantics**: a network failure, a non-2xx status, an
/// unparseable body, and a malformed entry anywhere in the feed all collapse
/// to an empty `Vec`. A partially-mapped catalog is never returned, so a
/// malformed later entry is indistinguishable from a network failure.
pub async fn fetch_catalog(client: &InsightsClient, store_url: &str) -> Vec<Product> {
    match fetch_catalog_inner(client, store_url).await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(
                store_url,
                error = %e,
                "product feed fetch failed; continuing with empty catalog"
            );
            Vec::new()
        }
    }
}

async fn fetch_catalog_inner(
    client: &InsightsClient,
    store_url: &str,
) -> Result<Vec<Product>, ScraperError> {
    let response = client.fetch_products_json(store_url, FEED_PAGE_LIMIT).await?;
    let origin = extract_store_origin(store_url);

    response
        .products
        .into_iter()
        .map(|raw| product_from_feed(raw, &origin))
        .collect()
}

/// Maps one raw feed entry into the canonical [`Product`] shape.
///
/// The price is taken from the first listed variant and defaults to `0.0`
/// when the entry has no variants or the variant carries no price. The
/// canonical URL is `{origin}/products/{handle}`.
///
/// # Errors
///
/// Returns [`ScraperError::MalformedPrice`] when a present price string does
/// not parse as a number or is negative.
pub(crate) fn product_from_feed(
    raw: ShopifyProduct,
    origin: &str,
) -> Result<Product, ScraperError> {
    let price = match raw.variants.first().and_then(|v| v.price.as_deref()) {
        None => 0.0,
        Some(s) => {
            let parsed = s.parse::<f64>().map_err(|e| ScraperError::MalformedPrice {
                product_id: raw.id,
                reason: format!("\"{s}\" is not a number: {e}"),
            })?;
            if parsed < 0.0 {
                return Err(ScraperError::MalformedPrice {
                    product_id: raw.id,
                    reason: format!("price {parsed} is negative"),
                });
            }
            parsed
        }
    };

    Ok(Product {
        id: raw.id,
        title: raw.title,
        vendor: raw.vendor,
        product_type: raw.product_type,
        price,
        url: format!("{origin}/products/{}", raw.handle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopifyVariant;

    fn make_feed_product(id: i64, handle: &str, prices: &[&str]) -> ShopifyProduct {
        ShopifyProduct {
            id,
            title: "Trail Shoe".to_string(),
            vendor: "Acme".to_string(),
            product_type: "footwear".to_string(),
            handle: handle.to_string(),
            variants: prices
                .iter()
                .map(|p| ShopifyVariant {
                    price: Some((*p).to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn maps_first_variant_price_and_canonical_url() {
        let raw = make_feed_product(1, "trail-shoe", &["19.99", "24.99"]);
        let product = product_from_feed(raw, "https://acme.example").unwrap();
        assert!((product.price - 19.99).abs() < f64::EPSILON);
        assert_eq!(product.url, "https://acme.example/products/trail-shoe");
    }

    #[test]
    fn no_variants_defaults_price_to_zero() {
        let raw = make_feed_product(2, "sticker", &[]);
        let product = product_from_feed(raw, "https://acme.example").unwrap();
        assert!((product.price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_variant_price_defaults_to_zero() {
        let mut raw = make_feed_product(3, "mystery", &[]);
        raw.variants.push(ShopifyVariant { price: None });
        let product = product_from_feed(raw, "https://acme.example").unwrap();
        assert!((product.price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unparseable_price_is_an_error() {
        let raw = make_feed_product(4, "broken", &["free!"]);
        let err = product_from_feed(raw, "https://acme.example").unwrap_err();
        assert!(matches!(err, ScraperError::MalformedPrice { product_id: 4, .. }));
    }

    #[test]
    fn negative_price_is_an_error() {
        let raw = make_feed_product(5, "weird", &["-3.00"]);
        let err = product_from_feed(raw, "https://acme.example").unwrap_err();
        assert!(matches!(err, ScraperError::MalformedPrice { product_id: 5, .. }));
    }

    #[test]
    fn carries_identity_fields_through() {
        let raw = make_feed_product(6, "trail-shoe", &["19.99"]);
        let product = product_from_feed(raw, "https://acme.example").unwrap();
        assert_eq!(product.id, 6);
        assert_eq!(product.title, "Trail Shoe");
        assert_eq!(product.vendor, "Acme");
        assert_eq!(product.product_type, "footwear");
    }
}
