// src/fetch/live.rs
//! Live fetch engine: pulls each resolved source's RSS feed and turns items
//! into articles, lazily, one source at a time. Feed-level and item-level
//! failures surface as skippable stream errors, never as a request failure.

use async_stream::stream;
use chrono::{DateTime, Duration, Utc};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::fetch::types::{Article, ArticleProvider, ArticleStream, FetchError};
use crate::fetch::{ensure_metrics_described, normalize_text};
use crate::sources::SourceDescriptor;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

pub struct RssProvider {
    client: reqwest::Client,
}

impl RssProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for RssProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleProvider for RssProvider {
    fn stream(&self, sources: &[SourceDescriptor], days_back: u32) -> ArticleStream {
        ensure_metrics_described();

        let client = self.client.clone();
        let sources = sources.to_vec();
        let cutoff = Utc::now() - Duration::days(i64::from(days_back));

        Box::pin(stream! {
            for source in sources {
                // Unknown sources have no feed; they only show up in the
                // grouping summary.
                let Some(feed_url) = source.feed_url else {
                    tracing::debug!(source = %source.name, "no feed url, skipping source");
                    continue;
                };

                let body = match fetch_feed(&client, feed_url).await {
                    Ok(body) => body,
                    Err(message) => {
                        yield Err(FetchError::Http {
                            publisher: source.name.clone(),
                            message,
                        });
                        continue;
                    }
                };

                let items = match parse_feed(&source.name, &body) {
                    Ok(items) => items,
                    Err(e) => {
                        yield Err(e);
                        continue;
                    }
                };

                for item in items {
                    match article_from_item(&source.name, item) {
                        Ok(article) => {
                            if article.published_at >= cutoff {
                                counter!("fetch_articles_total").increment(1);
                                yield Ok(article);
                            }
                        }
                        Err(e) => yield Err(e),
                    }
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "live"
    }
}

async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, String> {
    let resp = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;
    resp.text().await.map_err(|e| e.to_string())
}

fn parse_feed(source: &str, xml: &str) -> Result<Vec<Item>, FetchError> {
    let t0 = std::time::Instant::now();
    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).map_err(|e| FetchError::Parse {
        publisher: source.to_string(),
        message: e.to_string(),
    })?;
    histogram!("fetch_parse_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    Ok(rss.channel.item)
}

fn article_from_item(source: &str, item: Item) -> Result<Article, FetchError> {
    let parse_err = |message: &str| FetchError::Parse {
        publisher: source.to_string(),
        message: message.to_string(),
    };

    let url = item.link.filter(|l| !l.is_empty()).ok_or_else(|| parse_err("item has no link"))?;
    let title = normalize_text(item.title.as_deref().unwrap_or_default());
    if title.is_empty() {
        return Err(parse_err("item has no title"));
    }

    let published_at = item
        .pub_date
        .as_deref()
        .and_then(parse_rfc2822_to_utc)
        .ok_or_else(|| parse_err("item has no usable pubDate"))?;

    Ok(Article {
        title,
        url,
        body_text: normalize_text(item.description.as_deref().unwrap_or_default()),
        published_at,
        source: source.to_string(),
        authors: Vec::new(),
    })
}

fn parse_rfc2822_to_utc(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(ts.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// RSS descriptions often carry HTML entities that are not valid XML.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Feed</title>
    <item>
      <title>Coral reefs under climate stress</title>
      <link>https://example.com/coral-climate</link>
      <pubDate>Tue, 25 Aug 2026 09:30:00 GMT</pubDate>
      <description>&lt;p&gt;Scientists report&nbsp;widespread bleaching.&lt;/p&gt;</description>
    </item>
    <item>
      <title>Item without a link</title>
      <pubDate>Tue, 25 Aug 2026 10:00:00 GMT</pubDate>
      <description>orphan</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parse_feed_reads_items() {
        let items = parse_feed("TheGuardian", SAMPLE_RSS).expect("parse sample feed");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn article_from_item_normalizes_fields() {
        let items = parse_feed("TheGuardian", SAMPLE_RSS).unwrap();
        let article = article_from_item("TheGuardian", items.into_iter().next().unwrap())
            .expect("first item is complete");
        assert_eq!(article.url, "https://example.com/coral-climate");
        assert_eq!(article.body_text, "Scientists report widespread bleaching.");
        assert_eq!(article.source, "TheGuardian");
        assert_eq!(article.published_at.to_rfc2822(), "Tue, 25 Aug 2026 09:30:00 +0000");
    }

    #[test]
    fn item_without_link_is_a_skippable_parse_error() {
        let items = parse_feed("TheGuardian", SAMPLE_RSS).unwrap();
        let bad = items.into_iter().nth(1).unwrap();
        let err = article_from_item("TheGuardian", bad).unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn malformed_feed_is_a_parse_error() {
        let err = parse_feed("BbcNews", "this is not xml").unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn rfc2822_dates_convert_to_utc() {
        let dt = parse_rfc2822_to_utc("Tue, 25 Aug 2026 05:30:00 -0400").unwrap();
        assert_eq!(dt.to_rfc2822(), "Tue, 25 Aug 2026 09:30:00 +0000");
        assert!(parse_rfc2822_to_utc("not a date").is_none());
    }
}
