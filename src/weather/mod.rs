//! Weather data collaborator
//!
//! The advisor only ever talks to weather data through [`WeatherProvider`];
//! [`OpenWeatherClient`] is the production implementation.

use async_trait::async_trait;

use crate::Result;
use crate::models::{AlertReport, Forecast, WeatherObservation};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Source of current conditions, forecasts and alerts for a named place.
///
/// Implementations are expected to be unreliable: every call may fail with a
/// network, provider or decoding error. Callers never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `location`.
    async fn fetch_current(&self, location: &str) -> Result<WeatherObservation>;

    /// One observation per day for the next `days` days.
    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<Forecast>;

    /// Official alerts. A missing subscription or unknown place yields an
    /// empty report rather than an error.
    async fn fetch_alerts(&self, location: &str) -> Result<AlertReport>;
}
