use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai_news_digest::cli::Cli;
use ai_news_digest::config::Config;
use ai_news_digest::domain::Source;
use ai_news_digest::errors::DigestResult;
use ai_news_digest::services::{DigestService, OpenAiSummarizer, WebhookNotifier};
use ai_news_digest::sources::RssAtomReader;

fn main() {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout only carries the confirmation line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_news_digest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> DigestResult<()> {
    // Load configuration before touching the network
    let config = Config::from_env()?;

    let summarizer = OpenAiSummarizer::new(&config)?;
    let notifier = WebhookNotifier::new(&config)?;

    let service = DigestService::new(Source::defaults(), RssAtomReader::new(), summarizer, notifier)
        .with_max_items(config.max_articles)
        .with_language(config.language);

    tracing::info!(
        sources = service.sources().len(),
        language = %config.language,
        "Building digest"
    );

    service.run()?;
    println!("{}", config.language.sent_confirmation());

    Ok(())
}
