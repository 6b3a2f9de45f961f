pub mod catalog;
pub mod client;
pub mod contact;
pub mod error;
pub mod faq;
pub mod hero;
mod html;
pub mod insights;
pub mod links;
pub mod social;
pub mod types;

pub use catalog::{fetch_catalog, FEED_PAGE_LIMIT};
pub use client::{extract_store_origin, InsightsClient};
pub use contact::extract_contact_details;
pub use error::ScraperError;
pub use faq::{extract_faqs, parse_faq_items};
pub use hero::match_hero_products;
pub use insights::extract_brand_insights;
pub use links::classify_links;
pub use social::extract_social_handles;
pub use types::{ShopifyProduct, ShopifyProductsResponse, ShopifyVariant};
