//! Regex-based HTML scanning helpers shared by the extractors.
//!
//! Storefront pages are parsed with tag-level regex scans rather than a full
//! DOM: the extractors only ever need anchors, meta tags, and flattened
//! text, and the pages in scope are server-rendered Liquid templates.

use std::sync::LazyLock;

use regex::Regex;

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>").expect("valid anchor regex"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid meta regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tag regex"));
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid script regex"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("valid style regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));

/// An `<a>` element with an `href` attribute: the resolved-at-scan-time raw
/// href and the flattened visible link text.
#[derive(Debug, Clone)]
pub(crate) struct Anchor {
    pub href: String,
    pub text: String,
}

/// Returns every anchor in `html` that carries a non-empty `href`.
pub(crate) fn anchors(html: &str) -> Vec<Anchor> {
    ANCHOR_RE
        .captures_iter(html)
        .filter_map(|cap| {
            let attrs = cap.get(1).map_or("", |m| m.as_str());
            let href = extract_attr(attrs, "href")?;
            if href.is_empty() {
                return None;
            }
            let text = clean_text(cap.get(2).map_or("", |m| m.as_str()));
            Some(Anchor { href, text })
        })
        .collect()
}

/// Extracts a quoted attribute value from a tag or attribute fragment.
pub(crate) fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!(r#"(?is)\b{}\s*=\s*["']([^"']*)["']"#, regex::escape(attr));
    let re = Regex::new(&pattern).expect("valid attr regex");
    re.captures(tag)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
}

/// Finds the `content` of the first `<meta>` whose `key_attr` equals
/// `key_value` (case-insensitive), e.g. `meta_content(html, "name",
/// "description")`.
pub(crate) fn meta_content(html: &str, key_attr: &str, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, "content").map(|raw| decode_entities(&raw).trim().to_string())
        } else {
            None
        }
    })
}

/// Strips tags, decodes entities, and collapses whitespace to single spaces.
pub(crate) fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flattens a whole document to its visible text: comments, script, and
/// style blocks are removed before tag stripping.
pub(crate) fn visible_text(html: &str) -> String {
    let no_comments = COMMENT_RE.replace_all(html, " ");
    let no_scripts = SCRIPT_RE.replace_all(&no_comments, " ");
    let no_styles = STYLE_RE.replace_all(&no_scripts, " ");
    clean_text(&no_styles)
}

/// Flattens an HTML fragment to text while preserving block structure: tag
/// boundaries become newlines, and blank lines are dropped.
pub(crate) fn text_lines(fragment: &str) -> String {
    let with_breaks = TAG_RE.replace_all(fragment, "\n");
    decode_entities(&with_breaks)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolves a possibly-relative href against a base URL.
pub(crate) fn absolutize_url(base_url: &str, candidate: &str) -> Option<String> {
    let candidate = candidate.replace("&amp;", "&");
    let base = reqwest::Url::parse(base_url).ok()?;
    base.join(&candidate).ok().map(|u| u.to_string())
}

/// Decodes the handful of entities that matter for keyword matching and
/// extracted text. `&amp;` is decoded last so `&amp;lt;` stays `&lt;`.
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
