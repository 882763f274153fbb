use chrono::NaiveDateTime;

use super::Language;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One source's section of the digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestFragment {
    Summary { source_name: String, text: String },
    Unavailable { source_name: String },
}

impl DigestFragment {
    pub fn summary(source_name: &str, text: String) -> Self {
        DigestFragment::Summary {
            source_name: source_name.to_string(),
            text,
        }
    }

    pub fn unavailable(source_name: &str) -> Self {
        DigestFragment::Unavailable {
            source_name: source_name.to_string(),
        }
    }

    pub fn source_name(&self) -> &str {
        match self {
            DigestFragment::Summary { source_name, .. } => source_name,
            DigestFragment::Unavailable { source_name } => source_name,
        }
    }

    /// Summary sections end with a newline so joined sections are separated by a blank line
    pub fn render(&self, language: Language) -> String {
        match self {
            DigestFragment::Summary { source_name, text } => {
                format!("{}\n{}\n", language.summary_heading(source_name), text)
            }
            DigestFragment::Unavailable { source_name } => {
                language.fetch_failed_notice(source_name)
            }
        }
    }
}

/// The full text posted to chat for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    text: String,
}

impl OutboundMessage {
    pub fn assemble(
        language: Language,
        generated_at: NaiveDateTime,
        fragments: &[DigestFragment],
    ) -> Self {
        let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();

        let mut blocks = Vec::with_capacity(fragments.len() + 1);
        blocks.push(language.digest_header(&timestamp));
        blocks.extend(fragments.iter().map(|f| f.render(language)));

        Self {
            text: blocks.join("\n"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for OutboundMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
