//! In-memory weather provider shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use weather_advisor::advisor::Chooser;
use weather_advisor::models::{AlertReport, DailyForecast, Forecast, WeatherAlert};
use weather_advisor::{AdvisorError, Result, WeatherObservation, WeatherProvider};

#[derive(Default)]
pub struct FakeProvider {
    observations: HashMap<String, WeatherObservation>,
    requests: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observation: WeatherObservation) -> Self {
        self.observations
            .insert(observation.location.to_lowercase(), observation);
        self
    }

    /// Places asked for so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn lookup(&self, location: &str) -> Result<WeatherObservation> {
        self.requests.lock().unwrap().push(location.to_string());
        self.observations
            .get(&location.to_lowercase())
            .cloned()
            .ok_or_else(|| AdvisorError::provider(404, "city not found"))
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn fetch_current(&self, location: &str) -> Result<WeatherObservation> {
        self.lookup(location)
    }

    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<Forecast> {
        let observation = self.lookup(location)?;
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let forecast = (0..i64::from(days))
            .map(|offset| {
                let date = start + Duration::days(offset);
                DailyForecast {
                    date,
                    day: date.format("%A").to_string(),
                    observation: observation.clone(),
                }
            })
            .collect();
        Ok(Forecast {
            location: observation.location.clone(),
            country: observation.country.clone(),
            forecast,
        })
    }

    async fn fetch_alerts(&self, location: &str) -> Result<AlertReport> {
        match self.lookup(location) {
            Ok(observation) => Ok(AlertReport::with_alerts(
                observation.location,
                vec![WeatherAlert {
                    event: "Flood Watch".to_string(),
                    description: "Rivers may overflow".to_string(),
                    start: "2024-06-03T12:00:00".to_string(),
                    end: "2024-06-04T00:00:00".to_string(),
                    sender: "NWS".to_string(),
                }],
            )),
            Err(_) => Ok(AlertReport::location_not_found(location)),
        }
    }
}

pub fn observation(location: &str, description: &str, temperature: f64, wind_speed: f64) -> WeatherObservation {
    WeatherObservation::new(location, "US", temperature, temperature, 55, wind_speed, description)
}

/// Always picks the first entry of a pool.
pub fn first() -> Chooser {
    Arc::new(|_| 0)
}

pub fn provider() -> Arc<FakeProvider> {
    Arc::new(
        FakeProvider::new()
            .with(observation("Boston", "clear sky", 22.6, 3.0))
            .with(observation("Chicago", "thunderstorm", 20.0, 5.0))
            .with(observation("New York", "light rain", 14.0, 6.0))
            .with(observation("Denver", "few clouds", 12.0, 21.5)),
    )
}
