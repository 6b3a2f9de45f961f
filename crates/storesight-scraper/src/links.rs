//! Link classification: sorting a page's anchors into the fixed set of
//! well-known storefront page slots.

use storesight_core::{ImportantLinks, LinkSlot};

use crate::html::{absolutize_url, anchors};

/// Keyword → slot table. Declarative so new keywords can be added without
/// touching the scan loop. A keyword matches when it appears in the
/// lower-cased link text or in the raw href.
const LINK_KEYWORDS: &[(&str, LinkSlot)] = &[
    ("contact", LinkSlot::ContactUs),
    ("privacy", LinkSlot::PrivacyPolicy),
    ("refund", LinkSlot::RefundPolicy),
    ("return", LinkSlot::RefundPolicy),
    ("blog", LinkSlot::Blogs),
    ("track", LinkSlot::TrackOrder),
    ("faq", LinkSlot::Faqs),
    ("frequently asked questions", LinkSlot::Faqs),
];

/// Classifies every anchor in `html` into [`ImportantLinks`] slots.
///
/// Hrefs are resolved to absolute URLs against `base_url` before storage.
/// Once a slot is filled it is never overwritten, so the first matching
/// anchor in document order wins. The result always carries all six slots;
/// a slot with no match stays `None`.
#[must_use]
pub fn classify_links(html: &str, base_url: &str) -> ImportantLinks {
    let mut links = ImportantLinks::default();

    for anchor in anchors(html) {
        let text = anchor.text.to_lowercase();
        for (keyword, slot) in LINK_KEYWORDS {
            if text.contains(keyword) || anchor.href.contains(keyword) {
                if let Some(absolute) = absolutize_url(base_url, &anchor.href) {
                    links.set_if_absent(*slot, absolute);
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://acme.example";

    #[test]
    fn empty_page_yields_all_slots_unfilled() {
        let links = classify_links("<html><body></body></html>", BASE);
        for slot in LinkSlot::ALL {
            assert!(links.get(slot).is_none(), "slot {slot:?} should be empty");
        }
    }

    #[test]
    fn classifies_by_link_text() {
        let html = r#"<a href="/pages/legal">Privacy notice</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(
            links.get(LinkSlot::PrivacyPolicy),
            Some("https://acme.example/pages/legal")
        );
    }

    #[test]
    fn classifies_by_href_when_text_is_unhelpful() {
        let html = r#"<a href="/pages/contact-us">Get in touch</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(
            links.get(LinkSlot::ContactUs),
            Some("https://acme.example/pages/contact-us")
        );
    }

    #[test]
    fn return_keyword_fills_refund_slot() {
        let html = r#"<a href="/pages/shipping-and-returns">Returns</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(
            links.get(LinkSlot::RefundPolicy),
            Some("https://acme.example/pages/shipping-and-returns")
        );
    }

    #[test]
    fn first_match_wins_per_slot() {
        let html = r#"
            <a href="/pages/faq">FAQ</a>
            <a href="/pages/other-faq">More FAQs</a>
        "#;
        let links = classify_links(html, BASE);
        assert_eq!(links.get(LinkSlot::Faqs), Some("https://acme.example/pages/faq"));
    }

    #[test]
    fn link_text_match_is_case_insensitive() {
        let html = r#"<a href="/pages/ordering">TRACK YOUR ORDER</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(
            links.get(LinkSlot::TrackOrder),
            Some("https://acme.example/pages/ordering")
        );
    }

    #[test]
    fn one_anchor_can_fill_multiple_slots() {
        let html = r#"<a href="/pages/help">Contact and FAQ</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(links.get(LinkSlot::ContactUs), Some("https://acme.example/pages/help"));
        assert_eq!(links.get(LinkSlot::Faqs), Some("https://acme.example/pages/help"));
    }

    #[test]
    fn absolute_hrefs_are_stored_as_is() {
        let html = r#"<a href="https://blog.acme.example/">Blog</a>"#;
        let links = classify_links(html, BASE);
        assert_eq!(links.get(LinkSlot::Blogs), Some("https://blog.acme.example/"));
    }
}
