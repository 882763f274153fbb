use crate::domain::ArticleEntry;
use crate::errors::DigestResult;

#[cfg_attr(test, mockall::automock)]
pub trait Summarizer: Send + Sync {
    /// Produce one digest for a source. `entries` must be non-empty.
    fn summarize(&self, source_name: &str, entries: &[ArticleEntry]) -> DigestResult<String>;
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn post(&self, message: &str) -> DigestResult<()>;
}
