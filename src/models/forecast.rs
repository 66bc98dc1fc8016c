//! Daily forecast collection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WeatherObservation;

/// Forecast for one day, represented by a single observation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Weekday name, e.g. "Monday"
    pub day: String,
    #[serde(flatten)]
    pub observation: WeatherObservation,
}

/// Multi-day forecast for a location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    pub location: String,
    pub country: String,
    pub forecast: Vec<DailyForecast>,
}

impl Forecast {
    #[must_use]
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}
