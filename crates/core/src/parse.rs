//! HTML parsing and CSS-selector lookups.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! a fetched page and navigating its node tree. Every lookup is explicit
//! about presence: [`select`](Document::select) returns the ordered sequence
//! of matches, [`select_one`](Document::select_one) returns at most one, so
//! "might be missing" paths in the extractors are handled at the call site
//! rather than through implicit null dereference.
//!
//! # Example
//!
//! ```rust
//! use tianqi_core::Document;
//!
//! let html = r#"<ul class="t clearfix"><li><h1>30日</h1></li></ul>"#;
//! let doc = Document::parse(html).unwrap();
//! let days = doc.select("ul.t.clearfix > li").unwrap();
//! assert_eq!(days.len(), 1);
//! assert!(doc.select_one("div#livezs").unwrap().is_none());
//! ```

use scraper::{Html, Selector};

use crate::{Result, WeatherError};

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WeatherError::Selector(e.to_string()))
}

/// Represents a parsed forecast page.
///
/// A Document wraps the page markup and provides methods for querying
/// elements using CSS selectors.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// scraper recovers from arbitrarily malformed markup, so the only
    /// rejected input is an empty or whitespace-only body.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::EmptyDocument`] if the body holds no markup.
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(WeatherError::EmptyDocument);
        }

        Ok(Self { html: Html::parse_document(html) })
    }

    /// Selects all matching elements, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Selector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first matching element, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Selector`] if the selector is invalid.
    pub fn select_one(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }
}

/// A wrapper around scraper's ElementRef for scoped lookups.
///
/// Element represents a single node in the page tree and supports nested
/// selector queries against its descendants.
///
/// # Example
///
/// ```rust
/// use tianqi_core::Document;
///
/// let html = r#"<li><p class="wea"> 多云 </p></li>"#;
/// let doc = Document::parse(html).unwrap();
/// let li = doc.select_one("li").unwrap().unwrap();
/// let wea = li.select_one("p.wea").unwrap().unwrap();
/// assert_eq!(wea.text(), "多云");
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the stripped text content of this element.
    ///
    /// Each text fragment is trimmed of surrounding whitespace and the
    /// fragments are joined with no separator, so markup indentation never
    /// leaks into extracted fields.
    pub fn text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Gets the value of an attribute, or `None` if not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Selects all matching descendant elements, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Selector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first matching descendant element, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Selector`] if the selector is invalid.
    pub fn select_one(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).next().map(|el| Element { element: el }))
    }
}
