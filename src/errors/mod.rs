use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Summarization errors
    #[error("Summarization service error: {0}")]
    Service(String),

    // Delivery errors
    #[error("Webhook delivery failed: {status} {body}")]
    Delivery { status: u16, body: String },

    #[error("Webhook error: {0}")]
    Webhook(String),

    // Caller errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<webhook::WebhookError> for DigestError {
    fn from(err: webhook::WebhookError) -> Self {
        match err {
            webhook::WebhookError::Rejected { status, body } => {
                DigestError::Delivery { status, body }
            }
            other => DigestError::Webhook(other.to_string()),
        }
    }
}

pub type DigestResult<T> = Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_becomes_delivery_error() {
        let err: DigestError = webhook::WebhookError::Rejected {
            status: 500,
            body: "server error".to_string(),
        }
        .into();

        assert!(matches!(err, DigestError::Delivery { status: 500, .. }));
        assert_eq!(err.to_string(), "Webhook delivery failed: 500 server error");
    }

    #[test]
    fn test_invalid_webhook_url_is_not_delivery() {
        let err: DigestError = webhook::WebhookError::InvalidUrl("bad".to_string()).into();
        assert!(matches!(err, DigestError::Webhook(_)));
    }
}
