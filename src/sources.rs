// src/sources.rs
//! Source catalog: known publishers grouped by region, best-effort resolution
//! of requested source names. Unknown names never fail a request; they pass
//! through under the Unknown region so the caller can see them in the summary.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "AU")]
    Au,
    #[serde(rename = "CA")]
    Ca,
    Unknown,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::Us => "US",
            Region::Uk => "UK",
            Region::Au => "AU",
            Region::Ca => "CA",
            Region::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A named publisher classified into a region. `feed_url` is only present for
/// catalogued publishers; unknown pass-through sources have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    pub name: String,
    pub region: Region,
    #[serde(skip)]
    pub feed_url: Option<&'static str>,
}

struct KnownSource {
    name: &'static str,
    region: Region,
    feed_url: &'static str,
}

const KNOWN_SOURCES: &[KnownSource] = &[
    KnownSource {
        name: "TheNewYorker",
        region: Region::Us,
        feed_url: "https://www.newyorker.com/feed/news",
    },
    KnownSource {
        name: "WashingtonTimes",
        region: Region::Us,
        feed_url: "https://www.washingtontimes.com/rss/headlines/news/",
    },
    KnownSource {
        name: "NprNews",
        region: Region::Us,
        feed_url: "https://feeds.npr.org/1001/rss.xml",
    },
    KnownSource {
        name: "Wired",
        region: Region::Us,
        feed_url: "https://www.wired.com/feed/rss",
    },
    KnownSource {
        name: "TheGuardian",
        region: Region::Uk,
        feed_url: "https://www.theguardian.com/uk/rss",
    },
    KnownSource {
        name: "BbcNews",
        region: Region::Uk,
        feed_url: "https://feeds.bbci.co.uk/news/rss.xml",
    },
    KnownSource {
        name: "TheIndependent",
        region: Region::Uk,
        feed_url: "https://www.independent.co.uk/rss",
    },
    KnownSource {
        name: "AbcNewsAu",
        region: Region::Au,
        feed_url: "https://www.abc.net.au/news/feed/51120/rss.xml",
    },
    KnownSource {
        name: "SydneyMorningHerald",
        region: Region::Au,
        feed_url: "https://www.smh.com.au/rss/feed.xml",
    },
    KnownSource {
        name: "CbcNews",
        region: Region::Ca,
        feed_url: "https://www.cbc.ca/webfeed/rss/rss-topstories",
    },
    KnownSource {
        name: "GlobeAndMail",
        region: Region::Ca,
        feed_url: "https://www.theglobeandmail.com/arc/outboundfeeds/rss/category/canada/",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceCatalog;

impl SourceCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Resolve requested source names into descriptors.
    ///
    /// Absent or empty `names` yields the full default catalog. Matching is
    /// case-sensitive against known identifiers; unmatched names are passed
    /// through under `Region::Unknown` instead of rejecting the request.
    /// Requested names are a set: repeats resolve once, in first-seen order.
    pub fn resolve(&self, names: Option<&[String]>) -> Vec<SourceDescriptor> {
        let names = match names {
            Some(names) if !names.is_empty() => names,
            _ => {
                return KNOWN_SOURCES.iter().map(descriptor).collect();
            }
        };

        let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
        names
            .iter()
            .filter(|requested| seen.insert(requested.as_str()))
            .map(|requested| {
                match KNOWN_SOURCES.iter().find(|k| k.name == requested.as_str()) {
                    Some(known) => descriptor(known),
                    None => {
                        tracing::debug!(source = %requested, "unknown source name, passing through");
                        SourceDescriptor {
                            name: requested.clone(),
                            region: Region::Unknown,
                            feed_url: None,
                        }
                    }
                }
            })
            .collect()
    }

    /// Region -> (count, names) over the default catalog. Derived, read-only;
    /// intended for startup logging and the status endpoint.
    pub fn grouping_summary(&self) -> BTreeMap<Region, (usize, Vec<String>)> {
        let mut out: BTreeMap<Region, (usize, Vec<String>)> = BTreeMap::new();
        for k in KNOWN_SOURCES {
            let entry = out.entry(k.region).or_insert_with(|| (0, Vec::new()));
            entry.0 += 1;
            entry.1.push(k.name.to_string());
        }
        out
    }
}

fn descriptor(k: &KnownSource) -> SourceDescriptor {
    SourceDescriptor {
        name: k.name.to_string(),
        region: k.region,
        feed_url: Some(k.feed_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_none_returns_full_default_set() {
        let catalog = SourceCatalog::new();
        let all = catalog.resolve(None);
        assert_eq!(all.len(), KNOWN_SOURCES.len());
        assert!(all.iter().all(|d| d.region != Region::Unknown));
        assert!(all.iter().all(|d| d.feed_url.is_some()));
    }

    #[test]
    fn resolve_empty_list_behaves_like_none() {
        let catalog = SourceCatalog::new();
        assert_eq!(catalog.resolve(Some(&[])).len(), KNOWN_SOURCES.len());
    }

    #[test]
    fn unknown_name_passes_through_as_unknown_region() {
        let catalog = SourceCatalog::new();
        let got = catalog.resolve(Some(&["Nonexistent".to_string()]));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Nonexistent");
        assert_eq!(got[0].region, Region::Unknown);
        assert!(got[0].feed_url.is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let catalog = SourceCatalog::new();
        let got = catalog.resolve(Some(&["theguardian".to_string()]));
        assert_eq!(got[0].region, Region::Unknown);

        let got = catalog.resolve(Some(&["TheGuardian".to_string()]));
        assert_eq!(got[0].region, Region::Uk);
    }

    #[test]
    fn repeated_names_resolve_once_in_first_seen_order() {
        let catalog = SourceCatalog::new();
        let got = catalog.resolve(Some(&[
            "TheGuardian".to_string(),
            "Wired".to_string(),
            "TheGuardian".to_string(),
        ]));
        let names: Vec<&str> = got.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["TheGuardian", "Wired"]);
    }

    #[test]
    fn grouping_summary_counts_match_catalog() {
        let summary = SourceCatalog::new().grouping_summary();
        let total: usize = summary.values().map(|(n, _)| n).sum();
        assert_eq!(total, KNOWN_SOURCES.len());
        assert!(summary.contains_key(&Region::Us));
        assert!(summary.contains_key(&Region::Uk));
        assert!(summary.contains_key(&Region::Au));
        assert!(summary.contains_key(&Region::Ca));
        assert!(!summary.contains_key(&Region::Unknown));

        let (uk_count, uk_names) = &summary[&Region::Uk];
        assert_eq!(*uk_count, uk_names.len());
        assert!(uk_names.contains(&"TheGuardian".to_string()));
    }
}
