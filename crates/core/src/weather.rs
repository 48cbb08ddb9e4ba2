//! The forecast pipeline: fetch, parse, extract, assemble.
//!
//! This module is the single point where all failure kinds collapse into
//! the failure-shaped [`WeatherReport`]. Callers of the convenience
//! functions always get a well-formed JSON document back; no error crosses
//! this boundary.
//!
//! # Example
//!
//! ```rust
//! use tianqi_core::extract_report;
//!
//! let html = r#"<ul class="t clearfix"><li>
//!     <h1>30日（今天）</h1><p class="wea">多云</p>
//!     <p class="tem"><span>33</span>/<i>24℃</i></p>
//! </li></ul>"#;
//!
//! let report = extract_report(html, "101010100");
//! assert!(!report.is_failure());
//! ```

use crate::extract::{ForecastDay, LifeIndexEntry, extract_forecast, extract_life_index};
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_city_page};
use crate::parse::Document;
use crate::report::WeatherReport;
use crate::Result;

fn try_extract(html: &str) -> Result<(Vec<ForecastDay>, Option<Vec<LifeIndexEntry>>)> {
    let doc = Document::parse(html)?;
    let weather = extract_forecast(&doc)?;
    let life_index = extract_life_index(&doc)?;

    Ok((weather, life_index))
}

/// Runs both extractors over raw page markup and assembles the report.
///
/// Pure and deterministic: byte-identical markup produces byte-identical
/// reports. Parse and extraction failures become the failure shape labeled
/// with `city_code`; they are never raised to the caller.
pub fn extract_report(html: &str, city_code: &str) -> WeatherReport {
    match try_extract(html) {
        Ok((weather, life_index)) => WeatherReport::forecast(weather, life_index),
        Err(e) => WeatherReport::failure(city_code, e),
    }
}

/// Serializes a report, falling back to a hand-built failure object if
/// serialization itself fails, so the caller always receives a document.
fn render(report: &WeatherReport, city_code: &str) -> String {
    let payload = report.to_json().unwrap_or_else(|e| {
        serde_json::json!({
            "error": format!("Fetch Error (city:{})", city_code),
            "detail": e.to_string(),
        })
        .to_string()
    });

    if report.is_failure() {
        eprintln!("{}", payload);
    }

    payload
}

/// Client for running the full fetch-and-extract pipeline.
///
/// # Example
///
/// ```rust,no_run
/// use tianqi_core::WeatherClient;
///
/// # #[tokio::main]
/// # async fn main() {
/// let client = WeatherClient::new();
/// let json = client.fetch_json("101190113").await;
/// println!("{}", json);
/// # }
/// ```
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct WeatherClient {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl WeatherClient {
    /// Creates a client with the default fetch configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client with a custom fetch configuration.
    pub fn with_config(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetches the city page and assembles the report.
    ///
    /// Transport failures are collapsed into the failure shape exactly like
    /// parse and extraction failures; this method never returns an error.
    pub async fn report(&self, city_code: &str) -> WeatherReport {
        match fetch_city_page(city_code, &self.config).await {
            Ok(html) => extract_report(&html, city_code),
            Err(e) => WeatherReport::failure(city_code, e),
        }
    }

    /// Fetches, extracts, and serializes in one step.
    ///
    /// Always returns a well-formed JSON document in one of the two
    /// canonical shapes. On failure the payload is additionally written to
    /// stderr before being returned.
    pub async fn fetch_json(&self, city_code: &str) -> String {
        let report = self.report(city_code).await;
        render(&report, city_code)
    }
}

/// Fetches the weather document for a city code with default settings.
///
/// Convenience wrapper over [`WeatherClient::fetch_json`].
#[cfg(feature = "fetch")]
pub async fn fetch_weather_data(city_code: &str) -> String {
    WeatherClient::new().fetch_json(city_code).await
}

/// Fetches the weather document for a city code with a custom configuration.
#[cfg(feature = "fetch")]
pub async fn fetch_weather_data_with_config(city_code: &str, config: FetchConfig) -> String {
    WeatherClient::with_config(config).fetch_json(city_code).await
}
