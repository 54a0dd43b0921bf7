//! 每日名言抓取（Quotable API）

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SillError};
use crate::storage::config::Config;

use super::REQUEST_TIMEOUT_SECS;

const QUOTABLE_URL: &str = "https://api.quotable.io/random";

/// 一条名言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
struct QuotableResponse {
    content: String,
    author: String,
}

/// 抓取随机名言，失败时按配置退回内置名言
pub fn fetch(config: &Config) -> Result<Quote> {
    match fetch_quotable() {
        Ok(quote) => Ok(quote),
        Err(_) if config.widgets.fallbacks => Ok(fallback_quote()),
        Err(e) => Err(e),
    }
}

fn fetch_quotable() -> Result<Quote> {
    let response = ureq::get(QUOTABLE_URL)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .call()
        .map_err(|e| SillError::http(e.to_string()))?;

    let body: QuotableResponse = response
        .into_json()
        .map_err(|e| SillError::http(e.to_string()))?;

    Ok(Quote {
        content: body.content,
        author: body.author,
    })
}

/// 内置名言（content, author）
const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
];

/// 随机取一条内置名言；拿不到随机数就退回第一条
pub fn fallback_quote() -> Quote {
    let mut buf = [0u8; 1];
    let index = match getrandom::getrandom(&mut buf) {
        Ok(()) => buf[0] as usize % FALLBACK_QUOTES.len(),
        Err(_) => 0,
    };
    let (content, author) = FALLBACK_QUOTES[index];
    Quote {
        content: content.to_string(),
        author: author.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quotable_payload() {
        let payload = r#"{
            "_id": "abc",
            "content": "Stay hungry, stay foolish.",
            "author": "Stewart Brand",
            "length": 26
        }"#;

        let body: QuotableResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.content, "Stay hungry, stay foolish.");
        assert_eq!(body.author, "Stewart Brand");
    }

    #[test]
    fn test_fallback_quote_is_from_builtin_set() {
        let quote = fallback_quote();
        assert!(FALLBACK_QUOTES
            .iter()
            .any(|(content, author)| *content == quote.content && *author == quote.author));
    }
}
