// src/request.rs
//! Search request/result types shared by both front ends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::types::Article;

pub const DEFAULT_DAYS_BACK: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Any include keyword may appear in the article body.
    Body,
    /// All include keywords must appear in the URL, no exclude keyword may.
    Url,
}

/// Invalid request configuration. The only error that aborts a search before
/// any fetch; everything else degrades to a smaller or truncated result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("at least one include keyword is required")]
    EmptyInclude,
    #[error("exclude keywords only apply to url searches")]
    ExcludeWithBodyMode,
}

/// One search, built once per call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub mode: SearchMode,
    pub include: Vec<String>,
    /// Meaningful only when `mode` is `Url`.
    pub exclude: Vec<String>,
    pub max_articles: Option<usize>,
    pub days_back: u32,
    /// No timeout means the collector relies on `max_articles` and stream
    /// exhaustion alone; default-timeout policy belongs to the front ends.
    pub timeout_seconds: Option<f64>,
    /// Absent means the full default source catalog.
    pub sources: Option<Vec<String>>,
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.include.is_empty() {
            return Err(RequestError::EmptyInclude);
        }
        if self.mode == SearchMode::Body && !self.exclude.is_empty() {
            return Err(RequestError::ExcludeWithBodyMode);
        }
        Ok(())
    }
}

/// Outcome of one search. `truncated` is true when collection stopped at the
/// deadline before the source stream was exhausted; reaching the count cap is
/// a natural completion, not a truncation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub articles: Vec<Article>,
    pub truncated: bool,
}
