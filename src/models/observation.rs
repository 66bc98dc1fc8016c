//! Weather observation model and display helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a single location, as reported by the weather provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherObservation {
    /// Resolved place name
    pub location: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Perceived temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Free-text description such as "light rain"
    pub description: String,
    /// Atmospheric pressure in hPa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<u32>,
    /// Provider icon id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Local sunrise time (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    /// Local sunset time (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    /// When this observation was obtained
    pub timestamp: DateTime<Utc>,
}

impl WeatherObservation {
    /// Create an observation with the core fields; optional extras start empty.
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        country: impl Into<String>,
        temperature: f64,
        feels_like: f64,
        humidity: u8,
        wind_speed: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            country: country.into(),
            temperature,
            feels_like,
            humidity,
            wind_speed,
            description: description.into(),
            pressure: None,
            icon: None,
            sunrise: None,
            sunset: None,
            timestamp: Utc::now(),
        }
    }

    /// Temperature rounded to the nearest whole degree, ties to even
    #[must_use]
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature.round_ties_even() as i64
    }

    /// Perceived temperature rounded to the nearest whole degree
    #[must_use]
    pub fn rounded_feels_like(&self) -> i64 {
        self.feels_like.round_ties_even() as i64
    }

    /// Description with the first letter upper-cased and the rest lower-cased
    #[must_use]
    pub fn format_description(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Wind speed as reported, always with a fractional part
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:?} m/s", self.wind_speed)
    }
}
