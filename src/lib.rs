//! Weather Advisor - weather lookups and a rule-based safety chatbot
//!
//! This library wraps the OpenWeatherMap API behind [`weather::WeatherProvider`]
//! and turns current conditions into safety advisories and travel
//! recommendations.

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisor::{Advisory, HazardCategory, IntentRouter};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use models::{AlertReport, Forecast, WeatherObservation};
pub use weather::{OpenWeatherClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
