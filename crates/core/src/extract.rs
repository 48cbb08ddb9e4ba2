//! Forecast and life-index extraction.
//!
//! This is the heart of the pipeline: two extractors that walk known
//! repeating structures in the weather.com.cn page markup and convert them
//! into normalized records.
//!
//! The forecast extractor is strict about the three mandatory fields of a
//! per-day block (date, condition, temperature) and tolerant of a missing
//! wind sub-node. The life-index extractor is tolerant throughout: an
//! absent container yields `None`, and advisory blocks missing one of their
//! two required sub-nodes are skipped silently.

use serde::Serialize;

use crate::parse::{Document, Element};
use crate::{Result, WeatherError};

/// Container of the per-day forecast blocks.
const FORECAST_BLOCKS: &str = "ul.t.clearfix > li";

/// Container of the life-index section; absent on some city pages.
const LIFE_INDEX_CONTAINER: &str = "div#livezs";

/// Advisory blocks inside the life-index container.
const LIFE_INDEX_BLOCKS: &str = "div.hide.show ul.clearfix > li";

/// One day's forecast, in page display form.
///
/// All fields are opaque display strings taken verbatim from the page; no
/// numeric or calendar parsing is applied. `wind` is the empty string when
/// the page omits the wind sub-node for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    /// Day label as displayed (e.g. "30日（今天）").
    pub date: String,
    /// Weather condition description (e.g. "多云").
    pub condition: String,
    /// Temperature range or value (e.g. "33/24℃").
    pub temperature: String,
    /// Wind descriptor, possibly empty.
    pub wind: String,
}

/// One life-style advisory (e.g. UV index, clothing index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeIndexEntry {
    /// Name of the index (e.g. "紫外线指数").
    pub index_name: String,
    /// Free-text recommendation.
    pub advice: String,
}

fn mandatory_text(block: &Element<'_>, index: usize, selector: &'static str) -> Result<String> {
    block
        .select_one(selector)?
        .map(|el| el.text())
        .ok_or(WeatherError::MissingElement { block: index, selector })
}

/// Extracts the multi-day forecast from a parsed page.
///
/// Walks every forecast block in document order (the first block is today)
/// and produces one [`ForecastDay`] per block. The page historically holds
/// seven blocks but no count is assumed.
///
/// # Errors
///
/// Returns [`WeatherError::MissingElement`] if any block lacks its date
/// (`h1`), condition (`p.wea`), or temperature (`p.tem`) node. A missing
/// wind sub-node (`p.win i`) is not an error; the field degrades to `""`.
pub fn extract_forecast(doc: &Document) -> Result<Vec<ForecastDay>> {
    let mut days = Vec::new();

    for (index, block) in doc.select(FORECAST_BLOCKS)?.into_iter().enumerate() {
        let date = mandatory_text(&block, index, "h1")?;
        let condition = mandatory_text(&block, index, "p.wea")?;
        // The temperature markup nests its value across spans with literal
        // newlines between them.
        let temperature = mandatory_text(&block, index, "p.tem")?.replace('\n', "");
        let wind = block
            .select_one("p.win i")?
            .map(|el| el.text())
            .unwrap_or_default();

        days.push(ForecastDay { date, condition, temperature, wind });
    }

    Ok(days)
}

/// Extracts the life-index advisories from a parsed page.
///
/// Distinguishes two non-error shapes:
///
/// - `Ok(None)` — the life-index container is absent from the page
///   entirely (sentinel "advisory data unavailable").
/// - `Ok(Some(entries))` — the container is present; `entries` holds one
///   record per advisory block carrying both its name (`em`) and advice
///   (`p`) sub-nodes, and may be empty when no block is complete.
pub fn extract_life_index(doc: &Document) -> Result<Option<Vec<LifeIndexEntry>>> {
    let Some(container) = doc.select_one(LIFE_INDEX_CONTAINER)? else {
        return Ok(None);
    };

    let mut entries = Vec::new();

    for block in container.select(LIFE_INDEX_BLOCKS)? {
        let name = block.select_one("em")?;
        let advice = block.select_one("p")?;

        if let (Some(name), Some(advice)) = (name, advice) {
            entries.push(LifeIndexEntry { index_name: name.text(), advice: advice.text() });
        }
    }

    Ok(Some(entries))
}
