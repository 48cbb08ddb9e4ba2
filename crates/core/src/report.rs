//! The result document returned to callers.
//!
//! [`WeatherReport`] is the tagged result threaded through the pipeline:
//! exactly one of its two shapes is produced per invocation, and both
//! serialize to the canonical JSON forms
//!
//! ```json
//! {"weather": [...], "life_index": [...] | null}
//! {"error": "Fetch Error (city:<code>)", "detail": "<cause>"}
//! ```

use std::fmt;

use serde::Serialize;

use crate::Result;
use crate::extract::{ForecastDay, LifeIndexEntry};

/// The complete result of one forecast lookup.
///
/// Either the extracted forecast plus advisories, or a failure payload
/// naming the requested city code. Never both, never neither.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WeatherReport {
    /// Successful extraction.
    Forecast {
        /// Per-day forecast records, in document order (first entry is today).
        weather: Vec<ForecastDay>,
        /// Life-index advisories; `None` (serialized as `null`) when the
        /// page carries no life-index container at all, as opposed to an
        /// empty list when the container holds no complete advisory.
        life_index: Option<Vec<LifeIndexEntry>>,
    },
    /// Failed fetch, parse, or extraction.
    Failure {
        /// Fixed label identifying the failed lookup.
        error: String,
        /// Free-text description of the underlying cause.
        detail: String,
    },
}

impl WeatherReport {
    /// Creates the success-shaped report.
    pub fn forecast(weather: Vec<ForecastDay>, life_index: Option<Vec<LifeIndexEntry>>) -> Self {
        Self::Forecast { weather, life_index }
    }

    /// Creates the failure-shaped report for a city lookup.
    ///
    /// The label carries the requested city code; the cause's display text
    /// becomes the detail field. No distinction between transport, parse,
    /// and extraction causes survives into the payload.
    pub fn failure(city_code: &str, cause: impl fmt::Display) -> Self {
        Self::Failure {
            error: format!("Fetch Error (city:{})", city_code),
            detail: cause.to_string(),
        }
    }

    /// Whether this is the failure shape.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Serializes the report to its canonical compact JSON encoding.
    ///
    /// Non-ASCII text is left unescaped.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
