use crate::domain::ArticleEntry;

#[cfg_attr(test, mockall::automock)]
pub trait FeedReader: Send + Sync {
    /// Fetch at most `max_items` entries in feed order.
    /// Unreachable or malformed feeds yield an empty list instead of an error.
    fn fetch_latest_entries(&self, feed_url: &str, max_items: usize) -> Vec<ArticleEntry>;
}
