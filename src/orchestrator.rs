// src/orchestrator.rs
//! Search orchestration: the single entry point both front ends call.
//! Resolves sources, binds the matcher variant, scopes a lazy stream from
//! the active provider, and delegates bounded collection.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::collector;
use crate::fetch::types::ArticleProvider;
use crate::matcher;
use crate::request::{RequestError, SearchMode, SearchRequest, SearchResult};
use crate::sources::{Region, SourceCatalog};

pub struct SearchOrchestrator {
    catalog: SourceCatalog,
    live: Arc<dyn ArticleProvider>,
    mock: Arc<dyn ArticleProvider>,
    active: RwLock<Arc<dyn ArticleProvider>>,
}

impl SearchOrchestrator {
    pub fn new(
        catalog: SourceCatalog,
        live: Arc<dyn ArticleProvider>,
        mock: Arc<dyn ArticleProvider>,
        mock_mode: bool,
    ) -> Self {
        let active = if mock_mode {
            mock.clone()
        } else {
            live.clone()
        };
        Self {
            catalog,
            live,
            mock,
            active: RwLock::new(active),
        }
    }

    /// Run one search. Only an invalid request fails; a slow or partially
    /// broken upstream degrades to a smaller or truncated result instead.
    pub async fn execute(&self, request: &SearchRequest) -> Result<SearchResult, RequestError> {
        request.validate()?;

        let resolved = self.catalog.resolve(request.sources.as_deref());
        let provider = self.active_provider();

        tracing::info!(
            provider = provider.name(),
            mode = ?request.mode,
            sources = resolved.len(),
            days_back = request.days_back,
            "starting search"
        );

        let stream = provider.stream(&resolved, request.days_back);

        // No configured timeout means no deadline at all; default-timeout
        // policy belongs to the front ends, not here. Negative and NaN
        // values clamp to an immediate deadline; a budget too large for a
        // Duration is indistinguishable from no budget.
        let deadline = request.timeout_seconds.and_then(|secs| {
            let budget = Duration::try_from_secs_f64(secs.max(0.0)).ok()?;
            Instant::now().checked_add(budget)
        });

        let include = request.include.clone();
        let result = match request.mode {
            SearchMode::Body => {
                collector::collect(
                    stream,
                    move |a| matcher::matches_body(a, &include),
                    request.max_articles,
                    deadline,
                )
                .await
            }
            SearchMode::Url => {
                let exclude = request.exclude.clone();
                collector::collect(
                    stream,
                    move |a| matcher::matches_url(a, &include, &exclude),
                    request.max_articles,
                    deadline,
                )
                .await
            }
        };

        tracing::info!(
            found = result.articles.len(),
            truncated = result.truncated,
            "search finished"
        );
        Ok(result)
    }

    /// Swap the active fetch provider. Returns the previous state. Takes
    /// effect immediately for all subsequent calls on this orchestrator;
    /// in-flight searches keep the provider they started with.
    pub fn set_mock_mode(&self, enabled: bool) -> bool {
        let mut active = self.active.write().expect("provider lock poisoned");
        let previous = Arc::ptr_eq(&*active, &self.mock);
        *active = if enabled {
            self.mock.clone()
        } else {
            self.live.clone()
        };
        tracing::info!(enabled, previous, "mock mode switched");
        previous
    }

    pub fn mock_mode(&self) -> bool {
        Arc::ptr_eq(&self.active_provider(), &self.mock)
    }

    pub fn grouping_summary(&self) -> BTreeMap<Region, (usize, Vec<String>)> {
        self.catalog.grouping_summary()
    }

    fn active_provider(&self) -> Arc<dyn ArticleProvider> {
        self.active.read().expect("provider lock poisoned").clone()
    }
}
