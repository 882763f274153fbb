use serde::{Deserialize, Serialize};

/// One parsed feed item. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleEntry {
    pub title: String,
    pub summary: String,
    pub link: String,
}

impl ArticleEntry {
    pub fn new(title: String, link: String) -> Self {
        Self {
            title,
            summary: String::new(),
            link,
        }
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }
}
