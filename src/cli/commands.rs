use clap::Parser;

/// Takes no options: every setting comes from the environment
#[derive(Parser)]
#[command(name = "ai-news-digest")]
#[command(about = "Summarize the latest AI news feeds and post the digest to Slack")]
#[command(
    long_about = "Summarize the latest AI news feeds and post the digest to Slack.\n\n\
                  Reads OPENAI_API_KEY and SLACK_WEBHOOK_URL from the environment or a .env file."
)]
#[command(version)]
pub struct Cli {}
