use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::domain::{ArticleEntry, Language};
use crate::errors::{DigestError, DigestResult};
use crate::services::traits::Summarizer;

/// Low temperature keeps digests short and stable
pub const TEMPERATURE: f64 = 0.3;

/// Per-entry cap on summary text embedded in the prompt
pub const MAX_PROMPT_SUMMARY_CHARS: usize = 400;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Summarizer backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    language: Language,
}

impl OpenAiSummarizer {
    pub fn new(config: &Config) -> DigestResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.openai_api_key.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.openai_base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            language: config.language,
        })
    }

    /// Build the user prompt: instruction, blank line, one line per entry
    pub fn build_prompt(language: Language, source_name: &str, entries: &[ArticleEntry]) -> String {
        let lines: Vec<String> = entries.iter().map(Self::entry_line).collect();

        format!(
            "{}\n\n{}",
            language.summary_request(source_name),
            lines.join("\n")
        )
    }

    /// Slack link markup when a link is present: `- <link|title>: summary`
    fn entry_line(entry: &ArticleEntry) -> String {
        let summary = truncate_to_char_boundary(&entry.summary, MAX_PROMPT_SUMMARY_CHARS);

        if entry.link.is_empty() {
            format!("- {}: {}", entry.title, summary)
        } else {
            format!("- <{}|{}>: {}", entry.link, entry.title, summary)
        }
    }

    fn extract_summary(response: ChatCompletionResponse) -> DigestResult<String> {
        let choice = response.choices.into_iter().next().ok_or_else(|| {
            DigestError::Service("response contained no choices".to_string())
        })?;

        let text = choice
            .message
            .content
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(DigestError::Service(
                "response contained no message content".to_string(),
            ));
        }

        Ok(text)
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, source_name: &str, entries: &[ArticleEntry]) -> DigestResult<String> {
        if entries.is_empty() {
            return Err(DigestError::InvalidInput(format!(
                "No entries to summarize for {}",
                source_name
            )));
        }

        let prompt = Self::build_prompt(self.language, source_name, entries);
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.language.system_instruction(),
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        debug!(
            source = source_name,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Requesting summary"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| DigestError::Service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DigestError::Service(format!("{} {}", status.as_u16(), body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| DigestError::Service(format!("invalid response body: {}", e)))?;

        Self::extract_summary(parsed)
    }
}

/// Truncate string to at most `max_chars` characters, respecting char boundaries
fn truncate_to_char_boundary(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
