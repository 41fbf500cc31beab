// src/lib.rs
// Public library surface for the two front ends and integration tests.

pub mod api;
pub mod collector;
pub mod config;
pub mod fetch;
pub mod matcher;
pub mod orchestrator;
pub mod request;
pub mod sources;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::fetch::types::{Article, ArticleProvider, ArticleStream, FetchError};
pub use crate::orchestrator::SearchOrchestrator;
pub use crate::request::{RequestError, SearchMode, SearchRequest, SearchResult};
pub use crate::sources::{Region, SourceCatalog, SourceDescriptor};
