// src/fetch/mod.rs
pub mod live;
pub mod mock;
pub mod types;

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

/// One-time metrics registration for the fetch path.
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("fetch_articles_total", "Articles produced by providers.");
        describe_counter!(
            "fetch_item_errors_total",
            "Per-item fetch/parse failures (skipped, not fatal)."
        );
        describe_histogram!("fetch_parse_ms", "Feed parse time in milliseconds.");
        describe_counter!(
            "search_truncated_total",
            "Searches stopped by the deadline."
        );
    });
}

/// Normalize article text: decode HTML entities, strip tags, collapse
/// whitespace.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").expect("ws regex"));
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// Normalize a source name for comparison by removing internal whitespace,
/// so "The Guardian" and "TheGuardian" refer to the same publisher.
pub fn normalize_source_name(name: &str) -> String {
    name.split_whitespace().collect()
}
