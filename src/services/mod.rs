pub mod digest_service;
pub mod notification_service;
pub mod summary_service;
pub mod traits;

pub use digest_service::DigestService;
pub use notification_service::WebhookNotifier;
pub use summary_service::OpenAiSummarizer;
pub use traits::{Notifier, Summarizer};
