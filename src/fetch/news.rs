//! 头条抓取
//!
//! 主源是 GNews（需要 API key），失败或未配置 key 时退到免费的
//! 静态镜像源，再不行用内置头条垫底。

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SillError};
use crate::storage::config::Config;

use super::REQUEST_TIMEOUT_SECS;

const GNEWS_URL: &str = "https://gnews.io/api/v4/top-headlines";
const FALLBACK_FEED_URL: &str =
    "https://saurav.tech/NewsAPI/top-headlines/category/general/us.json";

/// 单条头条
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub url: String,
    pub source: String,
}

/// GNews 与镜像源的响应结构相同
#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    source: ArticleSource,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: String,
}

/// 抓取头条。
///
/// 源的优先级：GNews（有 key 时）→ 镜像源 → 内置头条。
/// 兜底关闭时，前两级都失败就把错误交给面板。
pub fn fetch(config: &Config) -> Result<Vec<Headline>> {
    let limit = config.news.max_headlines;

    let primary = match config.news.resolved_api_key() {
        Some(key) => fetch_feed_url(&gnews_url(&key, limit), limit),
        None => Err(SillError::invalid_data("no news api key configured")),
    };

    match primary.or_else(|_| fetch_feed_url(FALLBACK_FEED_URL, limit)) {
        Ok(headlines) if !headlines.is_empty() => Ok(headlines),
        _ if config.widgets.fallbacks => Ok(static_headlines(limit)),
        Ok(_) => Err(SillError::invalid_data("no headlines in response")),
        Err(e) => Err(e),
    }
}

fn gnews_url(api_key: &str, limit: usize) -> String {
    format!("{}?token={}&lang=en&max={}", GNEWS_URL, api_key, limit)
}

fn fetch_feed_url(url: &str, limit: usize) -> Result<Vec<Headline>> {
    let response = ureq::get(url)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .call()
        .map_err(|e| SillError::http(e.to_string()))?;

    let feed: Feed = response
        .into_json()
        .map_err(|e| SillError::http(e.to_string()))?;

    Ok(collect_headlines(feed, limit))
}

/// 过滤坏条目（空标题、下架占位）并截断到上限
fn collect_headlines(feed: Feed, limit: usize) -> Vec<Headline> {
    feed.articles
        .into_iter()
        .filter(|article| !article.title.is_empty() && article.title != "[Removed]")
        .take(limit)
        .map(|article| Headline {
            title: article.title,
            url: article.url,
            source: article.source.name,
        })
        .collect()
}

/// 内置头条（所有源都失效时的最后一层）
pub fn static_headlines(limit: usize) -> Vec<Headline> {
    [
        ("Tech Industry Continues Rapid Growth in 2025", "Tech News"),
        ("New AI Breakthrough Revolutionizes Healthcare", "AI Daily"),
        ("Global Push for Sustainable Technology Solutions", "Green Tech"),
        ("Programming Languages Evolution: Trends to Watch", "Dev Weekly"),
        ("Cybersecurity Becomes Top Priority for Businesses", "Security Today"),
    ]
    .into_iter()
    .take(limit)
    .map(|(title, source)| Headline {
        title: title.to_string(),
        url: "#".to_string(),
        source: source.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_feed() -> Feed {
        serde_json::from_str(
            r#"{
                "totalArticles": 4,
                "articles": [
                    {"title": "First story", "url": "https://a.example/1",
                     "source": {"name": "Alpha"}},
                    {"title": "[Removed]", "url": "https://a.example/2",
                     "source": {"name": "Alpha"}},
                    {"title": "", "url": "https://a.example/3",
                     "source": {"name": "Beta"}},
                    {"title": "Second story", "url": "https://b.example/4",
                     "source": {"name": "Beta"}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_collect_filters_removed_and_empty_titles() {
        let headlines = collect_headlines(sample_feed(), 5);
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "First story");
        assert_eq!(headlines[0].source, "Alpha");
        assert_eq!(headlines[1].title, "Second story");
    }

    #[test]
    fn test_collect_caps_at_limit() {
        let headlines = collect_headlines(sample_feed(), 1);
        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "First story");
    }

    #[test]
    fn test_parse_feed_without_articles_field() {
        let feed: Feed = serde_json::from_str("{}").unwrap();
        assert!(collect_headlines(feed, 5).is_empty());
    }

    #[test]
    fn test_static_headlines_respect_limit() {
        assert_eq!(static_headlines(5).len(), 5);
        assert_eq!(static_headlines(3).len(), 3);
        assert!(static_headlines(5)
            .iter()
            .all(|headline| !headline.title.is_empty()));
    }

    #[test]
    fn test_gnews_url_carries_key_and_limit() {
        let url = gnews_url("secret", 5);
        assert!(url.starts_with(GNEWS_URL));
        assert!(url.contains("token=secret"));
        assert!(url.contains("max=5"));
    }
}
