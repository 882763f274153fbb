use serde::{Deserialize, Serialize};

/// Feeds aggregated on every run, in display order
pub const DEFAULT_SOURCES: &[(&str, &str)] = &[
    (
        "MIT Technology Review AI",
        "https://www.technologyreview.com/tag/artificial-intelligence/feed/",
    ),
    ("AI News", "https://artificialintelligence-news.com/feed/"),
    ("ITmedia AI＋", "https://www.itmedia.co.jp/ai-plus/rss2"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub feed_url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, feed_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feed_url: feed_url.into(),
        }
    }

    pub fn defaults() -> Vec<Source> {
        DEFAULT_SOURCES
            .iter()
            .map(|(name, url)| Source::new(*name, *url))
            .collect()
    }
}
