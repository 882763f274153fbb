use std::str::FromStr;

use url::Url;

use crate::domain::Language;
use crate::errors::{DigestError, DigestResult};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_ARTICLES: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub slack_webhook_url: String,
    pub openai_base_url: String,
    pub model: String,
    pub language: Language,
    pub max_articles: usize,
}

impl Config {
    /// Config with the two required values and defaults for the rest
    pub fn new(openai_api_key: String, slack_webhook_url: String) -> Self {
        Self {
            openai_api_key,
            slack_webhook_url,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: Language::default(),
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }

    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value lookup
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as missing
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY")
            .ok_or_else(|| DigestError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let slack_webhook_url = get("SLACK_WEBHOOK_URL")
            .ok_or_else(|| DigestError::MissingEnvVar("SLACK_WEBHOOK_URL".to_string()))?;
        Self::check_http_url("SLACK_WEBHOOK_URL", &slack_webhook_url)?;

        let openai_base_url = get("OPENAI_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        Self::check_http_url("OPENAI_BASE_URL", &openai_base_url)?;

        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let language = match get("DIGEST_LANGUAGE") {
            Some(value) => Language::from_str(&value).map_err(DigestError::Config)?,
            None => Language::default(),
        };

        let max_articles = match get("DIGEST_MAX_ARTICLES") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| {
                DigestError::Config(format!("DIGEST_MAX_ARTICLES must be a number, got '{}'", value))
            })?,
            None => DEFAULT_MAX_ARTICLES,
        };

        Ok(Self {
            openai_api_key,
            slack_webhook_url,
            openai_base_url,
            model,
            language,
            max_articles,
        })
    }

    fn check_http_url(name: &str, value: &str) -> DigestResult<()> {
        let parsed = Url::parse(value)
            .map_err(|e| DigestError::Config(format!("{} is not a valid URL: {}", name, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DigestError::Config(format!(
                "{} must use http or https, got '{}'",
                name, scheme
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("OPENAI_API_KEY", "sk-test"),
        ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T000/B000/XXX"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup(REQUIRED)).unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.language, Language::Japanese);
        assert_eq!(config.max_articles, 3);
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::from_lookup(lookup(&[(
            "SLACK_WEBHOOK_URL",
            "https://hooks.slack.com/services/T000",
        )]));

        match result {
            Err(DigestError::MissingEnvVar(name)) => assert_eq!(name, "OPENAI_API_KEY"),
            other => panic!("expected MissingEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_webhook_url() {
        let result = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")]));

        match result {
            Err(DigestError::MissingEnvVar(name)) => assert_eq!(name, "SLACK_WEBHOOK_URL"),
            other => panic!("expected MissingEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let result = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "   "),
            ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T000"),
        ]));

        assert!(matches!(result, Err(DigestError::MissingEnvVar(_))));
    }

    #[test]
    fn test_invalid_webhook_url() {
        let result = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("SLACK_WEBHOOK_URL", "hooks.slack.com/services"),
        ]));

        assert!(matches!(result, Err(DigestError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend_from_slice(&[
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("DIGEST_LANGUAGE", "en"),
            ("DIGEST_MAX_ARTICLES", "5"),
        ]);

        let config = Config::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.language, Language::English);
        assert_eq!(config.max_articles, 5);
    }

    #[test]
    fn test_bad_language() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DIGEST_LANGUAGE", "klingon"));

        let result = Config::from_lookup(lookup(&pairs));
        assert!(matches!(result, Err(DigestError::Config(_))));
    }

    #[test]
    fn test_bad_max_articles() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("DIGEST_MAX_ARTICLES", "-1"));

        let result = Config::from_lookup(lookup(&pairs));
        assert!(matches!(result, Err(DigestError::Config(_))));
    }
}
