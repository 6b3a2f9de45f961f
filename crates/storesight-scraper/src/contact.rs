//! Email and phone extraction from flattened page text.

use std::sync::LazyLock;

use regex::Regex;
use storesight_core::ContactDetails;

use crate::html::visible_text;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Loose phone pattern: optional country code, optional parentheses around
/// the area code, common separators. Groups are non-capturing so the whole
/// match is the collected number. Formats are not validated beyond this.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

/// Extracts emails and phone numbers from a document's visible text.
///
/// Operates on the whole flattened document, not just anchors, so addresses
/// in footers and plain paragraphs are found. The orchestrator calls this
/// once per source page and unions the results itself; no cross-document
/// merging happens here.
#[must_use]
pub fn extract_contact_details(html: &str) -> ContactDetails {
    let text = visible_text(html);

    let emails = EMAIL_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phone_numbers = PHONE_RE
        .find_iter(&text)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    ContactDetails {
        emails,
        phone_numbers,
    }
}
