pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod parse;
pub mod report;
pub mod weather;

pub use error::{Result, WeatherError};
pub use extract::{ForecastDay, LifeIndexEntry, extract_forecast, extract_life_index};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_city_page, forecast_url};
pub use parse::{Document, Element};
pub use report::WeatherReport;
pub use weather::extract_report;
#[cfg(feature = "fetch")]
pub use weather::{WeatherClient, fetch_weather_data, fetch_weather_data_with_config};
