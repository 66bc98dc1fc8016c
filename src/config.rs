//! Configuration management for the weather advisor
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AdvisorError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is configured anywhere else
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Weather provider configuration
    pub weather: WeatherConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the OpenWeatherMap API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Number of days returned by the forecast endpoint
    pub forecast_days: u8,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Location used when a request omits the `location` query parameter
    pub default_location: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_forecast_days() -> u8 {
    5
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_location() -> String {
    "New York".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_location: default_location(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl WeatherConfig {
    /// Returns the API key or a configuration error when none is set.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AdvisorError::config(format!(
                "OpenWeatherMap API key is required. Set weather.api_key or {API_KEY_ENV}."
            ))),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // WEATHER_ADVISOR_SERVER__PORT=8080 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("WEATHER_ADVISOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: AdvisorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.weather.api_key.is_none() {
            config.weather.api_key = std::env::var(API_KEY_ENV).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weather-advisor").join("config.toml"))
    }

    /// Apply default values to fields left empty by a partial config file
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.default_location.trim().is_empty() {
            self.server.default_location = default_location();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// The API key may be absent here; it is only required once a client is built.
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(AdvisorError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 120 {
            return Err(
                AdvisorError::config("Weather API timeout cannot exceed 120 seconds").into(),
            );
        }

        if !(1..=5).contains(&self.weather.forecast_days) {
            return Err(
                AdvisorError::config("Forecast days must be between 1 and 5").into(),
            );
        }

        if self.server.port == 0 {
            return Err(AdvisorError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(AdvisorError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.weather.forecast_days, 5);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.default_location, "New York");
        assert_eq!(config.logging.level, "info");
        assert!(config.weather.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_require_api_key() {
        let mut config = AdvisorConfig::default();
        assert!(matches!(
            config.weather.require_api_key(),
            Err(AdvisorError::Config { .. })
        ));

        config.weather.api_key = Some("0123456789abcdef".to_string());
        assert_eq!(config.weather.require_api_key().unwrap(), "0123456789abcdef");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = AdvisorConfig::default();
        config.weather.api_key = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AdvisorConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AdvisorConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = AdvisorConfig::default();
        config.weather.forecast_days = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = AdvisorConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AdvisorConfig::default();
        config.weather.base_url.clear();
        config.server.default_location = "  ".to_string();
        config.weather.timeout_seconds = 0;
        config.apply_defaults();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(config.server.default_location, "New York");
        assert_eq!(config.weather.timeout_seconds, 10);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = std::env::temp_dir().join(format!("weather-advisor-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 8080\ndefault_location = \"Boston\"").unwrap();
        writeln!(file, "[weather]\napi_key = \"file-key-123\"").unwrap();

        let config = AdvisorConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.default_location, "Boston");
        assert_eq!(config.weather.api_key.as_deref(), Some("file-key-123"));
        assert_eq!(config.weather.forecast_days, 5);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AdvisorConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("weather-advisor"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
