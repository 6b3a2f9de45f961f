//! The extraction orchestrator: one linear pass from store URL to
//! [`BrandInsights`].

use storesight_core::{BrandInsights, LinkSlot};

use crate::catalog::fetch_catalog;
use crate::client::{extract_store_origin, InsightsClient};
use crate::contact::extract_contact_details;
use crate::error::ScraperError;
use crate::faq::extract_faqs;
use crate::hero::match_hero_products;
use crate::html::meta_content;
use crate::links::classify_links;
use crate::social::extract_social_handles;

/// Runs the full extraction pipeline against one storefront.
///
/// The steps run in a fixed order with no branching back: homepage fetch,
/// link classification, conditional contact-page fetch, contact union,
/// catalog fetch, hero matching, brand context, social handles, FAQs,
/// assembly. Only the homepage fetch is fatal; every later step degrades to
/// its empty/absent default on failure and the run completes.
///
/// State is local to one call: concurrent runs for different stores share
/// nothing but the client's connection pool.
///
/// # Errors
///
/// Returns [`ScraperError::SourceUnreachable`] when the homepage cannot be
/// fetched. No partial aggregate is produced in that case.
pub async fn extract_brand_insights(
    client: &InsightsClient,
    store_url: &str,
) -> Result<BrandInsights, ScraperError> {
    let base = extract_store_origin(store_url);

    let homepage = client
        .fetch_page(&base)
        .await
        .ok_or_else(|| ScraperError::SourceUnreachable { url: base.clone() })?;
    tracing::debug!(store_url = %base, "homepage fetched");

    let links = classify_links(&homepage, &base);

    // The homepage doubles as the contact source when no contact link was
    // discovered; its contacts are extracted either way, so that case needs
    // no second extraction. A contact page that fails to fetch contributes
    // nothing.
    let mut contact_details = extract_contact_details(&homepage);
    if let Some(contact_url) = links.get(LinkSlot::ContactUs) {
        match client.fetch_page(contact_url).await {
            Some(contact_page) => {
                contact_details.merge(extract_contact_details(&contact_page));
            }
            None => {
                tracing::warn!(
                    url = contact_url,
                    "contact page unavailable; using homepage contacts only"
                );
            }
        }
    }

    let product_catalog = fetch_catalog(client, &base).await;
    let hero_products = match_hero_products(&homepage, &product_catalog);
    tracing::debug!(
        catalog = product_catalog.len(),
        heroes = hero_products.len(),
        "catalog cross-referenced"
    );

    let brand_context = meta_content(&homepage, "name", "description");
    if brand_context.is_none() {
        tracing::debug!(store_url = %base, "homepage has no meta description");
    }

    let social_handles = extract_social_handles(&homepage);
    let faqs = extract_faqs(client, links.get(LinkSlot::Faqs)).await;

    Ok(BrandInsights {
        store_url: base,
        brand_context,
        product_catalog,
        hero_products,
        social_handles,
        contact_details,
        privacy_policy_url: links.get(LinkSlot::PrivacyPolicy).map(str::to_owned),
        refund_policy_url: links.get(LinkSlot::RefundPolicy).map(str::to_owned),
        faqs,
        important_links: links,
    })
}
