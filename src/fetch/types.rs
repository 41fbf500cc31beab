// src/fetch/types.rs
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use serde::Serialize;
use thiserror::Error;

use crate::sources::SourceDescriptor;

/// A crawled news article. The search core only reads these; producing them
/// is the providers' job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub body_text: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
    pub authors: Vec<String>,
}

/// A single item failed to fetch or parse. Always recoverable: the collector
/// skips the item and keeps pulling.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error fetching {publisher}: {message}")]
    Http { publisher: String, message: String },
    #[error("failed to parse item from {publisher}: {message}")]
    Parse { publisher: String, message: String },
}

/// Lazy, possibly-blocking sequence of articles. Individual items may fail
/// independently without ending the stream.
pub type ArticleStream = BoxStream<'static, Result<Article, FetchError>>;

pub trait ArticleProvider: Send + Sync {
    /// Build a lazy article stream scoped to the resolved sources and the
    /// `days_back` recency window. Nothing is fetched until the stream is
    /// pulled.
    fn stream(&self, sources: &[SourceDescriptor], days_back: u32) -> ArticleStream;

    fn name(&self) -> &'static str;
}
