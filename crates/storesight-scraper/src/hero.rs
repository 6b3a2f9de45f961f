//! Hero product selection: cross-referencing homepage product links against
//! the already-fetched catalog.

use std::collections::BTreeSet;

use storesight_core::Product;

use crate::html::anchors;

const PRODUCTS_PATH: &str = "/products/";

/// Selects the catalog products referenced from the homepage.
///
/// Takes the homepage HTML and the catalog as a slice — the catalog must
/// already be fetched, and this function cannot trigger a second feed fetch.
/// Anchors whose href contains `/products/` contribute a handle: the
/// trailing path segment after the last `/products/`, with any query string
/// stripped. A catalog product joins the result at most once, when its
/// canonical URL ends with any discovered handle. Ordering follows the
/// catalog, not the homepage.
#[must_use]
pub fn match_hero_products(html: &str, catalog: &[Product]) -> Vec<Product> {
    let mut handles: BTreeSet<String> = BTreeSet::new();

    for anchor in anchors(html) {
        if let Some(idx) = anchor.href.rfind(PRODUCTS_PATH) {
            let tail = &anchor.href[idx + PRODUCTS_PATH.len()..];
            let handle = tail.split('?').next().unwrap_or(tail);
            if !handle.is_empty() {
                handles.insert(handle.to_string());
            }
        }
    }

    catalog
        .iter()
        .filter(|product| handles.iter().any(|handle| product.url.ends_with(handle.as_str())))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, handle: &str) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            vendor: "Acme".to_string(),
            product_type: "footwear".to_string(),
            price: 10.0,
            url: format!("https://acme.example/products/{handle}"),
        }
    }

    #[test]
    fn matches_homepage_product_links_against_catalog() {
        let catalog = vec![make_product(1, "shoe"), make_product(2, "boot")];
        let html = r#"<a href="/products/shoe">Shop the shoe</a>"#;
        let heroes = match_hero_products(html, &catalog);
        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].id, 1);
    }

    #[test]
    fn query_string_is_stripped_from_handles() {
        let catalog = vec![make_product(1, "shoe")];
        let html = r#"<a href="/products/shoe?variant=123">Featured</a>"#;
        let heroes = match_hero_products(html, &catalog);
        assert_eq!(heroes.len(), 1, "variant query must not defeat the match");
    }

    #[test]
    fn product_appears_once_despite_multiple_matching_anchors() {
        let catalog = vec![make_product(1, "shoe")];
        let html = r#"
            <a href="/products/shoe">one</a>
            <a href="/products/shoe?variant=9">two</a>
            <a href="https://acme.example/products/shoe">three</a>
        "#;
        let heroes = match_hero_products(html, &catalog);
        assert_eq!(heroes.len(), 1);
    }

    #[test]
    fn heroes_preserve_catalog_order_not_homepage_order() {
        let catalog = vec![
            make_product(1, "alpha"),
            make_product(2, "beta"),
            make_product(3, "gamma"),
        ];
        // Homepage links in reverse catalog order.
        let html = r#"
            <a href="/products/gamma">g</a>
            <a href="/products/alpha">a</a>
        "#;
        let heroes = match_hero_products(html, &catalog);
        let ids: Vec<i64> = heroes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn heroes_are_a_subset_of_the_catalog() {
        let catalog = vec![make_product(1, "shoe")];
        let html = r#"<a href="/products/unlisted-thing">mystery</a>"#;
        let heroes = match_hero_products(html, &catalog);
        assert!(heroes.is_empty(), "links to unknown products contribute nothing");
    }

    #[test]
    fn bare_products_path_contributes_no_handle() {
        let catalog = vec![make_product(1, "shoe")];
        let html = r#"<a href="/products/">All products</a>"#;
        let heroes = match_hero_products(html, &catalog);
        assert!(heroes.is_empty(), "empty handle must not match every product");
    }

    #[test]
    fn non_product_anchors_are_ignored() {
        let catalog = vec![make_product(1, "shoe")];
        let html = r#"<a href="/collections/all">All</a>"#;
        let heroes = match_hero_products(html, &catalog);
        assert!(heroes.is_empty());
    }
}
