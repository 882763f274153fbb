use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::config::DEFAULT_MAX_ARTICLES;
use crate::domain::{DigestFragment, Language, OutboundMessage, Source};
use crate::errors::DigestResult;
use crate::services::traits::{Notifier, Summarizer};
use crate::sources::FeedReader;

/// Runs fetch -> summarize -> post once over a fixed list of sources.
///
/// Failure handling per stage:
///
/// | Stage      | Failure                              | Outcome                               |
/// |------------|--------------------------------------|---------------------------------------|
/// | Reader     | unreachable, malformed, no entries   | "could not fetch" fragment, run goes on |
/// | Summarizer | transport error, bad status, no text | run aborts, nothing is posted         |
/// | Notifier   | status other than 200                | run aborts with status and body       |
pub struct DigestService<R: FeedReader, S: Summarizer, N: Notifier> {
    sources: Vec<Source>,
    reader: R,
    summarizer: S,
    notifier: N,
    max_items: usize,
    language: Language,
}

impl<R: FeedReader, S: Summarizer, N: Notifier> DigestService<R, S, N> {
    pub fn new(sources: Vec<Source>, reader: R, summarizer: S, notifier: N) -> Self {
        Self {
            sources,
            reader,
            summarizer,
            notifier,
            max_items: DEFAULT_MAX_ARTICLES,
            language: Language::default(),
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Build the fragment for one source
    pub fn fragment_for(&self, source: &Source) -> DigestResult<DigestFragment> {
        let entries = self
            .reader
            .fetch_latest_entries(&source.feed_url, self.max_items);

        if entries.is_empty() {
            warn!(source = %source.name, "No entries retrieved");
            return Ok(DigestFragment::unavailable(&source.name));
        }

        info!(source = %source.name, count = entries.len(), "Summarizing entries");
        let text = self.summarizer.summarize(&source.name, &entries)?;

        Ok(DigestFragment::summary(&source.name, text))
    }

    /// Build every fragment in source order; stops at the first summarizer failure
    pub fn collect_fragments(&self) -> DigestResult<Vec<DigestFragment>> {
        self.sources
            .iter()
            .map(|source| self.fragment_for(source))
            .collect()
    }

    /// Assemble the outbound message without posting it
    pub fn compose(&self, generated_at: NaiveDateTime) -> DigestResult<OutboundMessage> {
        let fragments = self.collect_fragments()?;
        Ok(OutboundMessage::assemble(self.language, generated_at, &fragments))
    }

    /// Compose and post exactly once
    pub fn run_at(&self, generated_at: NaiveDateTime) -> DigestResult<OutboundMessage> {
        let message = self.compose(generated_at)?;
        self.notifier.post(message.as_str())?;
        Ok(message)
    }

    pub fn run(&self) -> DigestResult<OutboundMessage> {
        self.run_at(Local::now().naive_local())
    }
}
