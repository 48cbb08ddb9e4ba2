//! Fetching forecast pages from weather.com.cn.
//!
//! This module performs the single outbound HTTP GET of the pipeline: the
//! city code is substituted into a fixed URL template and the page is
//! requested with a fixed identifying `User-Agent` and a bounded timeout.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{Result, WeatherError};

/// URL template the city code is substituted into.
const URL_TEMPLATE: &str = "http://www.weather.com.cn/weather";

/// The upstream site serves a degraded page to unrecognized clients, so the
/// request always identifies as a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// HTTP client configuration for fetching forecast pages.
///
/// This struct controls timeout and user agent settings for the page request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with the request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: USER_AGENT.to_string() }
    }
}

/// Builds the forecast page URL for a city code.
///
/// The city code is an opaque token assigned by the upstream city directory
/// (e.g. `101010100` for Beijing); its shape is not validated here.
///
/// # Example
///
/// ```rust
/// use tianqi_core::forecast_url;
///
/// assert_eq!(
///     forecast_url("101010100"),
///     "http://www.weather.com.cn/weather/101010100.shtml"
/// );
/// ```
pub fn forecast_url(city_code: &str) -> String {
    format!("{}/{}.shtml", URL_TEMPLATE, city_code)
}

/// Fetches the raw forecast page for a city code.
///
/// This function performs one HTTP GET and returns the response body as
/// text. A timeout maps to [`WeatherError::Timeout`], a non-2xx response to
/// [`WeatherError::HttpStatus`], and other transport failures to
/// [`WeatherError::HttpError`].
pub async fn fetch_city_page(city_code: &str, config: &FetchConfig) -> Result<String> {
    let url = forecast_url(city_code);
    let parsed_url = Url::parse(&url).map_err(|e| WeatherError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(WeatherError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout { timeout: config.timeout }
            } else {
                WeatherError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("Mozilla/5.0"));
    }

    #[rstest]
    #[case("101010100", "http://www.weather.com.cn/weather/101010100.shtml")]
    #[case("101190113", "http://www.weather.com.cn/weather/101190113.shtml")]
    fn test_forecast_url(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(forecast_url(code), expected);
    }

    #[test]
    fn test_forecast_url_parses() {
        let url = Url::parse(&forecast_url("101010100")).unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("www.weather.com.cn"));
    }

    #[test]
    fn test_error_timeout_message() {
        let err = WeatherError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }
}
