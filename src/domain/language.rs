use serde::{Deserialize, Serialize};

/// Output language for prompts, notices and the digest header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    pub fn digest_header(&self, timestamp: &str) -> String {
        match self {
            Language::Japanese => format!("*AIニュース要約* (`{}`)", timestamp),
            Language::English => format!("*AI News Digest* (`{}`)", timestamp),
        }
    }

    pub fn fetch_failed_notice(&self, source_name: &str) -> String {
        match self {
            Language::Japanese => format!("> {} のニュースを取得できませんでした。", source_name),
            Language::English => format!("> Could not fetch news from {}.", source_name),
        }
    }

    pub fn summary_heading(&self, source_name: &str) -> String {
        match self {
            Language::Japanese => format!("*{}* の最新要約:", source_name),
            Language::English => format!("*{}* latest summary:", source_name),
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            Language::Japanese => "あなたは有能な技術ニュース要約アシスタントです。",
            Language::English => "You are a capable technology news summarization assistant.",
        }
    }

    /// Instruction placed before the entry list in the user prompt
    pub fn summary_request(&self, source_name: &str) -> String {
        match self {
            Language::Japanese => format!(
                "以下は「{}」の最新AIニュース記事の見出しと概要です。\n\
                 これらを技術トレンドや注目ポイントがひと目でわかるよう、\
                 日本語で250文字以内の箇条書き要約にしてください。",
                source_name
            ),
            Language::English => format!(
                "Below are the headlines and summaries of the latest AI news articles from \"{}\".\n\
                 Summarize them as bullet points in English, within 250 characters, \
                 so that technology trends and highlights are clear at a glance.",
                source_name
            ),
        }
    }

    pub fn sent_confirmation(&self) -> &'static str {
        match self {
            Language::Japanese => "Slackへ送信しました。",
            Language::English => "Sent digest to Slack.",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Language::Japanese),
            "en" | "english" => Ok(Language::English),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::from_str("ja").unwrap(), Language::Japanese);
        assert_eq!(Language::from_str("EN").unwrap(), Language::English);
        assert_eq!(Language::from_str(" english ").unwrap(), Language::English);
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_japanese_strings() {
        let lang = Language::Japanese;
        assert_eq!(
            lang.digest_header("2025-01-02 09:30"),
            "*AIニュース要約* (`2025-01-02 09:30`)"
        );
        assert_eq!(
            lang.fetch_failed_notice("AI News"),
            "> AI News のニュースを取得できませんでした。"
        );
        assert_eq!(lang.summary_heading("AI News"), "*AI News* の最新要約:");
    }

    #[test]
    fn test_summary_request_names_source() {
        for lang in [Language::Japanese, Language::English] {
            let request = lang.summary_request("AI News");
            assert!(request.contains("AI News"));
            assert!(request.contains("250"));
        }
    }
}
