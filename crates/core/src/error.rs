//! Error types for forecast scraping operations.
//!
//! This module defines the main error type [`WeatherError`] which represents
//! all possible errors that can occur during page fetching, markup parsing,
//! and forecast extraction.
//!
//! # Example
//!
//! ```rust
//! use tianqi_core::{Result, WeatherError};
//!
//! fn check_body(html: &str) -> Result<()> {
//!     if html.trim().is_empty() {
//!         return Err(WeatherError::EmptyDocument);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for forecast scraping operations.
///
/// The variants fall into three classes, all of which are collapsed into the
/// failure-shaped [`WeatherReport`](crate::WeatherReport) at the pipeline
/// boundary:
///
/// - transport: [`HttpError`](WeatherError::HttpError),
///   [`HttpStatus`](WeatherError::HttpStatus),
///   [`Timeout`](WeatherError::Timeout),
///   [`InvalidUrl`](WeatherError::InvalidUrl)
/// - parse: [`EmptyDocument`](WeatherError::EmptyDocument),
///   [`Selector`](WeatherError::Selector)
/// - extraction: [`MissingElement`](WeatherError::MissingElement)
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP response.
    ///
    /// Returned when the upstream page answers with a non-2xx status code.
    #[error("Request failed with HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when the page fetch exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL built from the city code.
    ///
    /// The city code itself is opaque and never validated, but the URL
    /// formed from it must still parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body contains no parseable markup.
    #[error("Response body is empty")]
    EmptyDocument,

    /// A CSS selector failed to parse.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A mandatory structural element is missing from a forecast block.
    ///
    /// Raised when a per-day block lacks its date, condition, or temperature
    /// node. Optional absences (the wind sub-node, the life-index container)
    /// never produce this error.
    #[error("Forecast block {block} is missing mandatory element `{selector}`")]
    MissingElement { block: usize, selector: &'static str },

    /// Report serialization errors from serde_json.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for WeatherError.
///
/// This is a convenience alias for `std::result::Result<T, WeatherError>`.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_display() {
        let err = WeatherError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_missing_element_display() {
        let err = WeatherError::MissingElement { block: 3, selector: "p.tem" };
        assert!(err.to_string().contains("block 3"));
        assert!(err.to_string().contains("p.tem"));
    }

    #[test]
    fn test_http_status_display() {
        let err = WeatherError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
    }
}
