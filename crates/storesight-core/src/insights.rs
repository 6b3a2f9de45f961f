use serde::{Deserialize, Serialize};

use crate::contact::ContactDetails;
use crate::links::ImportantLinks;
use crate::product::Product;
use crate::social::SocialHandles;

/// One question/answer pair extracted from a storefront FAQ page.
///
/// Both fields are required; items appear in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The aggregate result of one extraction run against a storefront.
///
/// Constructed once, fully populated before being handed to the caller, and
/// immutable afterwards — there is no partial or streaming delivery. A field
/// at its empty/absent default may mean either "not present on the site" or
/// "the step that fills it failed"; the aggregate does not distinguish them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandInsights {
    /// Normalized store origin, the identity key of the record.
    pub store_url: String,
    /// Homepage meta description, when the store provides one.
    pub brand_context: Option<String>,
    /// Full product catalog in feed order. Product IDs are unique.
    pub product_catalog: Vec<Product>,
    /// Catalog products referenced from the homepage ("featured"). Always a
    /// deduplicated subsequence of `product_catalog`, in catalog order.
    pub hero_products: Vec<Product>,
    pub social_handles: SocialHandles,
    pub contact_details: ContactDetails,
    /// Convenience copy of `important_links.privacy_policy`.
    pub privacy_policy_url: Option<String>,
    /// Convenience copy of `important_links.refund_policy`.
    pub refund_policy_url: Option<String>,
    /// FAQ pairs in document order; empty when no FAQ page was discovered.
    pub faqs: Vec<FaqItem>,
    pub important_links: ImportantLinks,
}
