//! FAQ extraction from the storefront's accordion markup.

use std::sync::LazyLock;

use regex::Regex;
use storesight_core::FaqItem;

use crate::client::InsightsClient;
use crate::html::{clean_text, text_lines};

static FAQ_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<details\b[^>]*class\s*=\s*["'][^"']*accordion__item[^"']*["'][^>]*>(.*?)</details>"#)
        .expect("valid accordion item regex")
});
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<summary\b[^>]*>(.*?)</summary>").expect("valid summary regex"));
static ANSWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*class\s*=\s*["'][^"']*accordion__content[^"']*["'][^>]*>(.*?)</div>"#)
        .expect("valid accordion content regex")
});

/// Fetches the discovered FAQ page and extracts its question/answer pairs.
///
/// Returns an empty sequence when no FAQ link was discovered or the page is
/// unavailable; neither case aborts the run.
pub async fn extract_faqs(client: &InsightsClient, faq_url: Option<&str>) -> Vec<FaqItem> {
    let Some(url) = faq_url else {
        return Vec::new();
    };
    let Some(html) = client.fetch_page(url).await else {
        tracing::debug!(url, "FAQ page unavailable; continuing without FAQs");
        return Vec::new();
    };
    parse_faq_items(&html)
}

/// Extracts question/answer pairs from accordion markup, in document order.
///
/// An item is a `<details class="...accordion__item...">` block. It yields a
/// pair only when BOTH a `<summary>` (the question) and a
/// `<div class="...accordion__content...">` (the answer body) are present
/// inside it; an item missing either is skipped whole — no partial pairs.
#[must_use]
pub fn parse_faq_items(html: &str) -> Vec<FaqItem> {
    FAQ_ITEM_RE
        .captures_iter(html)
        .filter_map(|cap| {
            let item = cap.get(1)?.as_str();
            let question = SUMMARY_RE
                .captures(item)
                .map(|c| clean_text(c.get(1).map_or("", |m| m.as_str())))?;
            let answer = ANSWER_RE
                .captures(item)
                .map(|c| text_lines(c.get(1).map_or("", |m| m.as_str())))?;
            Some(FaqItem { question, answer })
        })
        .collect()
}
