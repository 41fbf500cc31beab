// src/matcher.rs
//! Keyword matching predicates. Both variants are case-insensitive,
//! unanchored substring checks: "reef" matches "threefold". That is the
//! existing behavior and is kept on purpose; do not anchor on word
//! boundaries here without changing the documented contract.

use crate::fetch::types::Article;

/// Body search: true iff ANY include keyword appears in the article body.
/// Exclude terms have no meaning in this mode.
pub fn matches_body(article: &Article, include: &[String]) -> bool {
    let haystack = article.body_text.to_lowercase();
    include.iter().any(|kw| haystack.contains(&kw.to_lowercase()))
}

/// URL search: true iff EVERY include keyword appears in the article URL
/// and NO exclude keyword does.
pub fn matches_url(article: &Article, include: &[String], exclude: &[String]) -> bool {
    let haystack = article.url.to_lowercase();
    include.iter().all(|kw| haystack.contains(&kw.to_lowercase()))
        && !exclude.iter().any(|kw| haystack.contains(&kw.to_lowercase()))
}
