use tracing::info;
use webhook::WebhookClient;

use crate::config::Config;
use crate::errors::{DigestError, DigestResult};
use crate::services::traits::Notifier;

pub struct WebhookNotifier {
    client: WebhookClient,
}

impl WebhookNotifier {
    pub fn new(config: &Config) -> DigestResult<Self> {
        Self::with_url(&config.slack_webhook_url)
    }

    pub fn with_url(url: &str) -> DigestResult<Self> {
        Ok(Self {
            client: WebhookClient::new(url)?,
        })
    }
}

impl Notifier for WebhookNotifier {
    /// Deliver the whole message in one request; no truncation or retry
    fn post(&self, message: &str) -> DigestResult<()> {
        if message.is_empty() {
            return Err(DigestError::InvalidInput(
                "Refusing to post an empty message".to_string(),
            ));
        }

        self.client.post_text(message)?;
        info!(bytes = message.len(), "Digest delivered to webhook");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_rejected_at_construction() {
        let result = WebhookNotifier::with_url("hooks.slack.com/services");
        assert!(matches!(result, Err(DigestError::Webhook(_))));
    }

    #[test]
    fn test_empty_message_rejected_without_request() {
        // Unroutable address: the call must fail before any connection attempt
        let notifier = WebhookNotifier::with_url("http://127.0.0.1:9/hook").unwrap();
        let result = notifier.post("");
        assert!(matches!(result, Err(DigestError::InvalidInput(_))));
    }
}
