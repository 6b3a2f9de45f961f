//! Social account discovery from anchor hrefs.

use std::sync::LazyLock;

use regex::Regex;
use storesight_core::{SocialHandles, SocialPlatform};

use crate::html::anchors;

/// Platform URL patterns, tested unanchored against the raw (unresolved)
/// href. Declarative so platforms can be added without touching the scan
/// loop.
static SOCIAL_PATTERNS: LazyLock<[(SocialPlatform, Regex); 5]> = LazyLock::new(|| {
    [
        (
            SocialPlatform::Instagram,
            Regex::new(r"instagram\.com/[A-Za-z0-9_.]+").expect("valid instagram regex"),
        ),
        (
            SocialPlatform::Facebook,
            Regex::new(r"facebook\.com/[A-Za-z0-9_.]+").expect("valid facebook regex"),
        ),
        (
            SocialPlatform::Twitter,
            Regex::new(r"twitter\.com/[A-Za-z0-9_]+").expect("valid twitter regex"),
        ),
        (
            SocialPlatform::Tiktok,
            Regex::new(r"tiktok\.com/@[A-Za-z0-9_.]+").expect("valid tiktok regex"),
        ),
        (
            SocialPlatform::Youtube,
            Regex::new(r"youtube\.com/(?:user/|channel/|c/)?[A-Za-z0-9_\-]+")
                .expect("valid youtube regex"),
        ),
    ]
});

/// Scans every anchor href for platform-specific URL patterns.
///
/// The first anchor matching a platform wins and its raw href is stored;
/// later matches for the same platform are ignored.
#[must_use]
pub fn extract_social_handles(html: &str) -> SocialHandles {
    let mut handles = SocialHandles::default();

    for anchor in anchors(html) {
        for (platform, pattern) in SOCIAL_PATTERNS.iter() {
            if pattern.is_match(&anchor.href) {
                handles.set_if_absent(*platform, anchor.href.clone());
            }
        }
    }

    handles
}
