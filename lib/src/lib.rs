//! Incoming-webhook bindings for chat services
//! Posts plain text messages as `{"text": ...}` to a fixed webhook URL

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),
    #[error("Webhook rejected message: {status} {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

pub struct WebhookClient {
    url: Url,
    client: Client,
}

impl WebhookClient {
    pub fn new(url: &str) -> Result<Self, WebhookError> {
        let url = Url::parse(url).map_err(|e| WebhookError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebhookError::InvalidUrl(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Post a text message. Only a 200 response counts as delivered.
    pub fn post_text(&self, text: &str) -> Result<(), WebhookError> {
        let payload = TextPayload { text };

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(WebhookError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Post a text message to a webhook URL
pub fn post_text(url: &str, text: &str) -> Result<(), WebhookError> {
    WebhookClient::new(url)?.post_text(text)
}
