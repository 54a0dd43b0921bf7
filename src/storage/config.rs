//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

use super::sill_dir;

/// News API key 的环境变量名（优先于配置文件）
pub const NEWS_API_KEY_ENV: &str = "SILL_NEWS_API_KEY";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub widgets: WidgetsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 天气地点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// 展示用城市名
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            city: "Bogotá".to_string(),
            latitude: 4.71,
            longitude: -74.07,
        }
    }
}

/// 新闻抓取配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// GNews API key（可选；环境变量优先）
    #[serde(default)]
    pub api_key: Option<String>,
    /// 最多展示几条头条
    #[serde(default = "default_max_headlines")]
    pub max_headlines: usize,
}

fn default_max_headlines() -> usize {
    5
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_headlines: default_max_headlines(),
        }
    }
}

impl NewsConfig {
    /// 解析生效的 API key：环境变量 > 配置文件。空串视为未配置。
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(NEWS_API_KEY_ENV)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.trim().is_empty())
    }
}

/// 面板刷新配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    /// 天气/新闻/名言的自动刷新间隔（秒）
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// 上游失败时是否退回内置数据；关闭后失败直接显示错误占位
    #[serde(default = "default_fallbacks")]
    pub fallbacks: bool,
}

fn default_refresh_secs() -> u64 {
    600
}

fn default_fallbacks() -> bool {
    true
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            fallbacks: default_fallbacks(),
        }
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    sill_dir().join("config.toml")
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    let dir = sill_dir();
    fs::create_dir_all(&dir)?;

    let content = toml::to_string_pretty(config)?;
    fs::write(config_path(), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.location.city, "Bogotá");
        assert_eq!(config.news.max_headlines, 5);
        assert_eq!(config.widgets.refresh_secs, 600);
        assert!(config.widgets.fallbacks);
        assert_eq!(config.theme.name, "Auto");
    }

    #[test]
    fn test_parse_partial_config() {
        // 缺省 section 全部回落到默认值
        let config: Config = toml::from_str(
            r#"
            [location]
            city = "Lisbon"
            latitude = 38.72
            longitude = -9.14

            [widgets]
            refresh_secs = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.location.city, "Lisbon");
        assert_eq!(config.widgets.refresh_secs, 120);
        assert!(config.widgets.fallbacks);
        assert_eq!(config.news.max_headlines, 5);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.theme.name = "Nord".to_string();
        config.news.api_key = Some("abc123".to_string());

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.theme.name, "Nord");
        assert_eq!(parsed.news.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_blank_api_key_counts_as_unset() {
        let news = NewsConfig {
            api_key: Some("   ".to_string()),
            max_headlines: 5,
        };
        // 环境变量未设置时，空白 key 视为未配置
        if std::env::var(NEWS_API_KEY_ENV).is_err() {
            assert!(news.resolved_api_key().is_none());
        }
    }
}
