use feed_rs::parser;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ArticleEntry;
use crate::errors::{DigestError, DigestResult};
use crate::sources::traits::FeedReader;

const USER_AGENT: &str = concat!("ai-news-digest/", env!("CARGO_PKG_VERSION"));

pub struct RssAtomReader {
    client: Client,
}

impl RssAtomReader {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn try_fetch(&self, feed_url: &str, max_items: usize) -> DigestResult<Vec<ArticleEntry>> {
        let url = Url::parse(feed_url).map_err(|e| DigestError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        Self::entries_from_bytes(&bytes, max_items)
    }

    /// Parse feed bytes and keep the first `max_items` entries
    pub fn entries_from_bytes(bytes: &[u8], max_items: usize) -> DigestResult<Vec<ArticleEntry>> {
        let parsed = parser::parse(bytes).map_err(|e| DigestError::FeedParse(e.to_string()))?;

        let entries = parsed
            .entries
            .into_iter()
            .take(max_items)
            .map(Self::entry_from_feed)
            .collect();

        Ok(entries)
    }

    fn entry_from_feed(entry: feed_rs::model::Entry) -> ArticleEntry {
        let title = entry
            .title
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default();

        let link = entry
            .links
            .into_iter()
            .next()
            .map(|l| l.href.trim().to_string())
            .unwrap_or_default();

        // Atom entries may carry only <content>
        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body))
            .map(|html| Self::html_to_text(&html))
            .unwrap_or_default();

        ArticleEntry::new(title, link).with_summary(summary)
    }

    /// Extract plain text from HTML content, collapsing whitespace
    fn html_to_text(html: &str) -> String {
        let document = Html::parse_fragment(html);
        let mut text = String::new();

        for node in document.root_element().descendants() {
            if let Some(text_node) = node.value().as_text() {
                text.push_str(text_node);
            }
            // Keep word boundaries between block elements
            if let Some(element) = node.value().as_element() {
                match element.name() {
                    "p" | "br" | "div" | "li" => text.push(' '),
                    _ => {}
                }
            }
        }

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for RssAtomReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedReader for RssAtomReader {
    fn fetch_latest_entries(&self, feed_url: &str, max_items: usize) -> Vec<ArticleEntry> {
        if max_items == 0 {
            return Vec::new();
        }

        match self.try_fetch(feed_url, max_items) {
            Ok(entries) => {
                debug!(feed_url, count = entries.len(), "Fetched feed entries");
                entries
            }
            Err(e) => {
                warn!(feed_url, error = %e, "Feed unavailable, continuing without entries");
                Vec::new()
            }
        }
    }
}
