//! Data models for the weather advisor
//!
//! - Observation: a single point-in-time reading for a place
//! - Forecast: one observation per upcoming day
//! - Alerts: official warnings issued for a place

pub mod alerts;
pub mod forecast;
pub mod observation;

pub use alerts::{AlertReport, WeatherAlert};
pub use forecast::{DailyForecast, Forecast};
pub use observation::WeatherObservation;
