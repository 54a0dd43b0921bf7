//! 天气抓取（Open-Meteo，不需要 API key）

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SillError};
use crate::storage::config::{Config, LocationConfig};

use super::REQUEST_TIMEOUT_SECS;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// 面板展示用的天气报告
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// 当前气温（°C）
    pub temperature: f64,
    pub description: &'static str,
    pub icon: &'static str,
    pub city: String,
    /// 相对湿度（%）
    pub humidity: f64,
    /// 风速（km/h）
    pub wind_speed: f64,
}

/// Open-Meteo 响应（只取用到的字段）
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    weather_code: u16,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
}

/// 抓取当前天气。
///
/// 上游失败时按配置退回静态兜底数据；兜底关闭时错误原样返回，
/// 面板显示错误占位。
pub fn fetch(config: &Config) -> Result<WeatherReport> {
    match fetch_open_meteo(&config.location) {
        Ok(report) => Ok(report),
        Err(_) if config.widgets.fallbacks => Ok(fallback_report(&config.location.city)),
        Err(e) => Err(e),
    }
}

fn fetch_open_meteo(location: &LocationConfig) -> Result<WeatherReport> {
    let response = ureq::get(OPEN_METEO_URL)
        .query("latitude", &location.latitude.to_string())
        .query("longitude", &location.longitude.to_string())
        .query(
            "current",
            "temperature_2m,weather_code,relative_humidity_2m,wind_speed_10m",
        )
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .call()
        .map_err(|e| SillError::http(e.to_string()))?;

    let body: OpenMeteoResponse = response
        .into_json()
        .map_err(|e| SillError::http(e.to_string()))?;

    let (description, icon) = describe_weather_code(body.current.weather_code);
    Ok(WeatherReport {
        temperature: body.current.temperature_2m,
        description,
        icon,
        city: location.city.clone(),
        humidity: body.current.relative_humidity_2m,
        wind_speed: body.current.wind_speed_10m,
    })
}

/// WMO weather code → 描述 + 图标
pub fn describe_weather_code(code: u16) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 | 48 => ("Fog", "🌫️"),
        51 => ("Light drizzle", "🌦️"),
        53 => ("Moderate drizzle", "🌦️"),
        55 => ("Heavy drizzle", "🌦️"),
        61 => ("Light rain", "🌧️"),
        63 => ("Moderate rain", "🌧️"),
        65 => ("Heavy rain", "🌧️"),
        71 => ("Light snow", "❄️"),
        73 => ("Moderate snow", "❄️"),
        75 => ("Heavy snow", "❄️"),
        95 => ("Thunderstorm", "⛈️"),
        96 => ("Thunderstorm with hail", "⛈️"),
        99 => ("Heavy thunderstorm", "⛈️"),
        _ => ("Unknown", "❓"),
    }
}

/// 上游不可用时的静态兜底数据
pub fn fallback_report(city: &str) -> WeatherReport {
    WeatherReport {
        temperature: 18.0,
        description: "Partly cloudy",
        icon: "⛅",
        city: city.to_string(),
        humidity: 65.0,
        wind_speed: 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_weather_code_tiers() {
        assert_eq!(describe_weather_code(0).0, "Clear sky");
        assert_eq!(describe_weather_code(45).0, "Fog");
        assert_eq!(describe_weather_code(48).0, "Fog");
        assert_eq!(describe_weather_code(63).0, "Moderate rain");
        assert_eq!(describe_weather_code(75).0, "Heavy snow");
        assert_eq!(describe_weather_code(99).0, "Heavy thunderstorm");
    }

    #[test]
    fn test_unknown_weather_code() {
        let (description, icon) = describe_weather_code(42);
        assert_eq!(description, "Unknown");
        assert_eq!(icon, "❓");
    }

    #[test]
    fn test_parse_open_meteo_payload() {
        let payload = r#"{
            "latitude": 4.75,
            "longitude": -74.0,
            "current": {
                "time": "2025-06-01T12:00",
                "temperature_2m": 16.4,
                "weather_code": 61,
                "relative_humidity_2m": 78,
                "wind_speed_10m": 9.6
            }
        }"#;

        let body: OpenMeteoResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(body.current.weather_code, 61);
        assert_eq!(body.current.temperature_2m, 16.4);
        assert_eq!(body.current.relative_humidity_2m, 78.0);
        assert_eq!(body.current.wind_speed_10m, 9.6);
    }

    #[test]
    fn test_fallback_report_uses_configured_city() {
        let report = fallback_report("Bogotá");
        assert_eq!(report.city, "Bogotá");
        assert_eq!(report.description, "Partly cloudy");
    }
}
