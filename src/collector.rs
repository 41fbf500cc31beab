// src/collector.rs
//! Bounded collection: drive a lazy article stream through a predicate,
//! stopping at a count cap and/or deadline without discarding progress.

use std::time::Instant;

use futures::StreamExt;
use metrics::counter;

use crate::fetch::types::{Article, ArticleStream};
use crate::request::SearchResult;

/// Pull articles one at a time, keeping those the predicate accepts.
///
/// Stop conditions are evaluated after every pull, matched or not, since the
/// pull itself consumes time:
/// 1. the buffer reached `max_articles` -> natural completion, `truncated = false`;
/// 2. the deadline passed -> `truncated = true`, the buffer is returned as-is.
///
/// The deadline is only consulted between pulls, so a single slow pull can
/// overrun it by its own duration. A failed pull is skipped, never retried,
/// and never aborts the collection.
pub async fn collect<P>(
    mut stream: ArticleStream,
    predicate: P,
    max_articles: Option<usize>,
    deadline: Option<Instant>,
) -> SearchResult
where
    P: Fn(&Article) -> bool,
{
    let mut articles: Vec<Article> = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            Ok(article) => {
                if predicate(&article) {
                    articles.push(article);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping article that failed to fetch");
                counter!("fetch_item_errors_total").increment(1);
            }
        }

        if let Some(cap) = max_articles {
            if articles.len() >= cap {
                tracing::debug!(count = articles.len(), "article cap reached");
                return SearchResult {
                    articles,
                    truncated: false,
                };
            }
        }

        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                tracing::info!(count = articles.len(), "deadline reached, returning partial result");
                counter!("search_truncated_total").increment(1);
                return SearchResult {
                    articles,
                    truncated: true,
                };
            }
        }
    }

    SearchResult {
        articles,
        truncated: false,
    }
}
