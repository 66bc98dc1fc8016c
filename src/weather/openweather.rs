//! OpenWeatherMap client
//!
//! Current conditions, a daily forecast sampled from the 3-hour feed, and
//! alerts via the One Call API (which needs a paid plan).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::models::{AlertReport, Forecast, WeatherAlert, WeatherObservation};
use crate::{AdvisorError, Result};

/// The forecast feed has one entry every three hours.
const ENTRIES_PER_DAY: usize = 8;

/// Weather API client for OpenWeatherMap
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherClient {
    /// Create a new client. Fails fast when no API key is configured.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdvisorError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}?", self.base_url, path);
        for (key, value) in params {
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            url.push('&');
        }
        url.push_str("appid=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }

    #[instrument(skip(self, params))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path, params);
        let start_time = Instant::now();

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Request timed out after {:.1}s", self.timeout.as_secs_f64());
                AdvisorError::network(format!(
                    "Weather provider did not answer within {}s",
                    self.timeout.as_secs()
                ))
            } else {
                warn!("Network error: {}", e);
                AdvisorError::network(e.without_url().to_string())
            }
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<openweather::ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            warn!("Provider returned {}: {}", status, message);
            return Err(AdvisorError::provider(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse provider response: {}", e);
            AdvisorError::invalid_response(format!("Failed to parse {path} response"))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn fetch_current(&self, location: &str) -> Result<WeatherObservation> {
        let response: openweather::CurrentResponse = self
            .get_json("/data/2.5/weather", &[("q", location), ("units", "metric")])
            .await?;

        let observation = response.into_observation();
        info!(
            "Fetched current weather for {}, {}: {}",
            observation.location, observation.country, observation.description
        );
        Ok(observation)
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<Forecast> {
        let response: openweather::ForecastResponse = self
            .get_json("/data/2.5/forecast", &[("q", location), ("units", "metric")])
            .await?;

        let forecast = response.into_forecast(usize::from(days));
        if forecast.is_empty() {
            return Err(AdvisorError::not_found(format!("No forecast data for {location}")));
        }
        info!(
            "Fetched {}-day forecast for {}",
            forecast.len(),
            forecast.location
        );
        Ok(forecast)
    }

    #[instrument(skip(self))]
    async fn fetch_alerts(&self, location: &str) -> Result<AlertReport> {
        let places: Vec<openweather::GeocodingResult> = self
            .get_json("/geo/1.0/direct", &[("q", location), ("limit", "1")])
            .await?;

        let Some(place) = places.first() else {
            warn!("No geocoding results for '{}'", location);
            return Ok(AlertReport::location_not_found(location));
        };
        debug!("Geocoded {} to ({:.4}, {:.4})", place.name, place.lat, place.lon);

        let lat = place.lat.to_string();
        let lon = place.lon.to_string();
        let params = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("exclude", "minutely,hourly"),
            ("units", "metric"),
        ];

        match self
            .get_json::<openweather::OneCallResponse>("/data/2.5/onecall", &params)
            .await
        {
            Ok(response) => {
                let alerts: Vec<WeatherAlert> = response
                    .alerts
                    .unwrap_or_default()
                    .into_iter()
                    .map(openweather::OneCallAlert::into_alert)
                    .collect();
                info!("Fetched {} alerts for {}", alerts.len(), location);
                Ok(AlertReport::with_alerts(location, alerts))
            }
            Err(AdvisorError::Provider { status: 401, .. }) => {
                warn!("One Call API access not available (requires paid subscription)");
                Ok(AlertReport::subscription_required(location))
            }
            Err(e) => Err(e),
        }
    }
}

fn format_local_time(timestamp: i64, offset_seconds: i32) -> Option<String> {
    let offset = FixedOffset::east_opt(offset_seconds)?;
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.with_timezone(&offset).format("%H:%M").to_string())
}

fn format_iso(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339()
}

/// OpenWeatherMap API response structures and conversion utilities
mod openweather {
    use chrono::{DateTime, FixedOffset, Offset, Utc};
    use serde::Deserialize;

    use super::{ENTRIES_PER_DAY, format_iso, format_local_time};
    use crate::models::{DailyForecast, Forecast, WeatherAlert, WeatherObservation};

    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        pub message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: u8,
        pub pressure: Option<u32>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
        pub icon: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Wind {
        #[serde(default)]
        pub speed: f64,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Sys {
        pub country: Option<String>,
        pub sunrise: Option<i64>,
        pub sunset: Option<i64>,
    }

    /// `/data/2.5/weather`
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        #[serde(default)]
        pub sys: Sys,
        pub main: MainData,
        #[serde(default)]
        pub wind: Wind,
        #[serde(default)]
        pub weather: Vec<Condition>,
        /// Shift from UTC in seconds
        #[serde(default)]
        pub timezone: i32,
    }

    /// `/data/2.5/forecast`
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
        pub city: City,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub dt: i64,
        pub main: MainData,
        #[serde(default)]
        pub wind: Wind,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct City {
        pub name: String,
        pub country: Option<String>,
        #[serde(default)]
        pub timezone: i32,
    }

    /// `/geo/1.0/direct`
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub lat: f64,
        pub lon: f64,
    }

    /// `/data/2.5/onecall`
    #[derive(Debug, Deserialize)]
    pub struct OneCallResponse {
        pub alerts: Option<Vec<OneCallAlert>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct OneCallAlert {
        pub event: Option<String>,
        pub description: Option<String>,
        pub start: Option<i64>,
        pub end: Option<i64>,
        pub sender_name: Option<String>,
    }

    impl OneCallAlert {
        pub fn into_alert(self) -> WeatherAlert {
            WeatherAlert {
                event: self.event.unwrap_or_else(|| "Unknown event".to_string()),
                description: self
                    .description
                    .unwrap_or_else(|| "No description available".to_string()),
                start: format_iso(self.start.unwrap_or(0)),
                end: format_iso(self.end.unwrap_or(0)),
                sender: self
                    .sender_name
                    .unwrap_or_else(|| "Unknown source".to_string()),
            }
        }
    }

    fn observation(
        location: &str,
        country: &str,
        main: &MainData,
        wind: &Wind,
        weather: &[Condition],
    ) -> WeatherObservation {
        let condition = weather.first();
        let mut observation = WeatherObservation::new(
            location,
            country,
            main.temp,
            main.feels_like,
            main.humidity,
            wind.speed,
            condition.map(|c| c.description.clone()).unwrap_or_default(),
        );
        observation.pressure = main.pressure;
        observation.icon = condition.and_then(|c| c.icon.clone());
        observation
    }

    impl CurrentResponse {
        pub fn into_observation(self) -> WeatherObservation {
            let country = self.sys.country.clone().unwrap_or_default();
            let mut observation =
                observation(&self.name, &country, &self.main, &self.wind, &self.weather);
            observation.sunrise = self
                .sys
                .sunrise
                .and_then(|t| format_local_time(t, self.timezone));
            observation.sunset = self
                .sys
                .sunset
                .and_then(|t| format_local_time(t, self.timezone));
            observation
        }
    }

    impl ForecastResponse {
        /// Takes every eighth entry, roughly one per day, up to `days` entries.
        pub fn into_forecast(self, days: usize) -> Forecast {
            let country = self.city.country.clone().unwrap_or_default();
            let offset = FixedOffset::east_opt(self.city.timezone).unwrap_or(Utc.fix());

            let forecast = self
                .list
                .iter()
                .step_by(ENTRIES_PER_DAY)
                .take(days)
                .filter_map(|entry| {
                    let local = DateTime::from_timestamp(entry.dt, 0)?.with_timezone(&offset);
                    let mut observation = observation(
                        &self.city.name,
                        &country,
                        &entry.main,
                        &entry.wind,
                        &entry.weather,
                    );
                    observation.timestamp = local.to_utc();
                    Some(DailyForecast {
                        date: local.date_naive(),
                        day: local.format("%A").to_string(),
                        observation,
                    })
                })
                .collect();

            Forecast {
                location: self.city.name,
                country,
                forecast,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenWeatherClient {
        let config = WeatherConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            timeout_seconds: 2,
            forecast_days: 5,
        };
        OpenWeatherClient::new(&config).unwrap()
    }

    fn current_body() -> serde_json::Value {
        json!({
            "name": "Boston",
            "sys": {"country": "US", "sunrise": 1_700_000_000, "sunset": 1_700_036_000},
            "main": {"temp": 22.6, "feels_like": 21.4, "humidity": 64, "pressure": 1012},
            "wind": {"speed": 3.6},
            "weather": [{"description": "light rain", "icon": "10d"}],
            "timezone": -18000
        })
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = WeatherConfig::default();
        assert!(matches!(
            OpenWeatherClient::new(&config),
            Err(AdvisorError::Config { .. })
        ));
    }

    #[test]
    fn test_url_encodes_parameters() {
        let config = WeatherConfig {
            api_key: Some("k".to_string()),
            base_url: "https://example.com/".to_string(),
            ..WeatherConfig::default()
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        assert_eq!(
            client.url("/data/2.5/weather", &[("q", "New York")]),
            "https://example.com/data/2.5/weather?q=New%20York&appid=k"
        );
    }

    #[test]
    fn test_format_local_time() {
        // 2023-11-14T22:13:20Z at UTC-5
        assert_eq!(format_local_time(1_700_000_000, -18000).as_deref(), Some("17:13"));
        assert_eq!(format_iso(0), "1970-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_fetch_current() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Boston"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
            .mount(&server)
            .await;

        let observation = client_for(&server).fetch_current("Boston").await.unwrap();
        assert_eq!(observation.location, "Boston");
        assert_eq!(observation.country, "US");
        assert_eq!(observation.temperature, 22.6);
        assert_eq!(observation.humidity, 64);
        assert_eq!(observation.wind_speed, 3.6);
        assert_eq!(observation.description, "light rain");
        assert_eq!(observation.pressure, Some(1012));
        assert_eq!(observation.icon.as_deref(), Some("10d"));
        assert_eq!(observation.sunrise.as_deref(), Some("17:13"));
    }

    #[tokio::test]
    async fn test_fetch_current_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_current("Atlantis").await.unwrap_err();
        match err {
            AdvisorError::Provider { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "city not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_current_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_current("Boston").await.unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_body())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_current("Boston").await.unwrap_err();
        assert!(matches!(err, AdvisorError::Network { .. }));
    }

    #[tokio::test]
    async fn test_fetch_forecast_samples_one_entry_per_day() {
        let server = MockServer::start().await;
        let list: Vec<serde_json::Value> = (0..40i64)
            .map(|i| {
                json!({
                    "dt": 1_700_006_400 + i * 3 * 3600,
                    "main": {"temp": 10.0 + i as f64, "feels_like": 9.0, "humidity": 70},
                    "wind": {"speed": 2.0},
                    "weather": [{"description": "few clouds", "icon": "02d"}]
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": list,
                "city": {"name": "Boston", "country": "US", "timezone": 0}
            })))
            .mount(&server)
            .await;

        let forecast = client_for(&server).fetch_forecast("Boston", 3).await.unwrap();
        assert_eq!(forecast.location, "Boston");
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast.forecast[0].observation.temperature, 10.0);
        assert_eq!(forecast.forecast[1].observation.temperature, 18.0);
        assert_eq!(forecast.forecast[0].date.to_string(), "2023-11-15");
        assert_eq!(forecast.forecast[0].day, "Wednesday");
    }

    #[tokio::test]
    async fn test_empty_forecast_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [],
                "city": {"name": "Boston", "country": "US"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_forecast("Boston", 5).await.unwrap_err();
        assert!(matches!(err, AdvisorError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_alerts_unknown_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let report = client_for(&server).fetch_alerts("Atlantis").await.unwrap();
        assert!(!report.has_alerts);
        assert_eq!(report.message.as_deref(), Some("No location found"));
    }

    #[tokio::test]
    async fn test_alerts_subscription_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Boston", "lat": 42.36, "lon": -71.06}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/onecall"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"cod": 401, "message": "Invalid API key"})))
            .mount(&server)
            .await;

        let report = client_for(&server).fetch_alerts("Boston").await.unwrap();
        assert!(report.subscription_required);
        assert!(!report.has_alerts);
    }

    #[tokio::test]
    async fn test_alerts_listed_with_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Miami", "lat": 25.76, "lon": -80.19}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/onecall"))
            .and(query_param("exclude", "minutely,hourly"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "alerts": [
                    {"event": "Hurricane Warning", "description": "Category 3", "start": 1_700_000_000, "end": 1_700_036_000, "sender_name": "NWS Miami"},
                    {}
                ]
            })))
            .mount(&server)
            .await;

        let report = client_for(&server).fetch_alerts("Miami").await.unwrap();
        assert!(report.has_alerts);
        assert_eq!(report.alerts.len(), 2);
        assert_eq!(report.alerts[0].event, "Hurricane Warning");
        assert_eq!(report.alerts[0].start, "2023-11-14T22:13:20+00:00");
        assert_eq!(report.alerts[1].event, "Unknown event");
        assert_eq!(report.alerts[1].sender, "Unknown source");
    }

    #[tokio::test]
    async fn test_alerts_other_provider_errors_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_alerts("Boston").await.unwrap_err();
        assert!(matches!(err, AdvisorError::Provider { status: 500, .. }));
    }
}
