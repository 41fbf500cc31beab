// src/fetch/mock.rs
//! Deterministic stand-in for the live fetch engine: a fixed in-memory
//! article set, filtered by source and recency only. Keyword filtering stays
//! in the shared matcher/collector path so mock and live searches exercise
//! identical semantics.

use chrono::{Duration, Utc};
use futures::stream;
use once_cell::sync::Lazy;

use crate::fetch::normalize_source_name;
use crate::fetch::types::{Article, ArticleProvider, ArticleStream};
use crate::sources::SourceDescriptor;

static MOCK_ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    let now = Utc::now();
    vec![
        Article {
            title: "Climate Change: A Global Challenge".into(),
            url: "https://example.com/climate-change".into(),
            body_text: "Climate change continues to be a pressing issue. Scientists warn \
                        about rising temperatures and their impact on ecosystems. Recent \
                        studies show concerning trends in global warming."
                .into(),
            published_at: now - Duration::days(1),
            source: "The Guardian".into(),
            authors: vec!["Emma Thompson".into(), "James Wilson".into()],
        },
        Article {
            title: "Tech Giants Face New Regulations".into(),
            url: "https://example.com/tech-regulations".into(),
            body_text: "Major technology companies are facing increased scrutiny over data \
                        privacy and market dominance. Lawmakers propose new regulations to \
                        address concerns."
                .into(),
            published_at: now - Duration::days(2),
            source: "The New Yorker".into(),
            authors: vec!["Sarah Chen".into()],
        },
        Article {
            title: "Advances in AI Technology".into(),
            url: "https://example.com/ai-advances".into(),
            body_text: "Artificial intelligence continues to evolve with new breakthroughs \
                        in machine learning and neural networks. Researchers develop more \
                        efficient algorithms that are transforming industries. Quantum \
                        algorithms could lead to breakthroughs in drug discovery, materials \
                        science, and climate modeling."
                .into(),
            published_at: now - Duration::days(3),
            source: "Wired".into(),
            authors: vec![
                "Michael Rodriguez".into(),
                "David Kim".into(),
                "Lisa Patel".into(),
            ],
        },
        Article {
            title: "Healthcare Innovation During Pandemic".into(),
            url: "https://example.com/healthcare-innovation".into(),
            body_text: "The healthcare sector has seen rapid innovation in response to \
                        global challenges. Telemedicine and digital health solutions have \
                        become mainstream, transforming how medical care is delivered and \
                        accessed worldwide."
                .into(),
            published_at: now - Duration::days(4),
            source: "The Guardian".into(),
            authors: vec!["Dr. Rachel Foster".into()],
        },
        Article {
            title: "Sustainable Energy Solutions".into(),
            url: "https://example.com/sustainable-energy".into(),
            body_text: "Renewable energy adoption continues to grow worldwide. Solar and \
                        wind power installations reach record levels as costs decrease. \
                        Policy initiatives and carbon pricing are accelerating the shift, \
                        helping to mitigate climate change while powering economic growth."
                .into(),
            published_at: now - Duration::days(5),
            source: "The New Yorker".into(),
            authors: vec!["Alex Green".into(), "Maria Santos".into()],
        },
    ]
});

#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ArticleProvider for MockProvider {
    fn stream(&self, sources: &[SourceDescriptor], days_back: u32) -> ArticleStream {
        let wanted: Vec<String> = sources
            .iter()
            .map(|s| normalize_source_name(&s.name))
            .collect();
        let cutoff = Utc::now() - Duration::days(i64::from(days_back));

        let articles: Vec<Article> = MOCK_ARTICLES
            .iter()
            .filter(|a| {
                if a.published_at < cutoff {
                    tracing::debug!(title = %a.title, "skipping mock article, too old");
                    return false;
                }
                if !wanted.is_empty() && !wanted.contains(&normalize_source_name(&a.source)) {
                    tracing::debug!(title = %a.title, source = %a.source, "skipping mock article, source not requested");
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        Box::pin(stream::iter(articles.into_iter().map(Ok)))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
