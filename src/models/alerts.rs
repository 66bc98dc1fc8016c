//! Weather alert models

use serde::{Deserialize, Serialize};

/// A single official weather alert
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherAlert {
    pub event: String,
    pub description: String,
    /// ISO-8601 start time
    pub start: String,
    /// ISO-8601 end time
    pub end: String,
    pub sender: String,
}

/// Alerts for a location, or the reason none could be listed
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AlertReport {
    pub location: String,
    pub alerts: Vec<WeatherAlert>,
    pub has_alerts: bool,
    /// Set when the provider plan does not include alerts
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub subscription_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AlertReport {
    /// Report carrying the given alerts
    #[must_use]
    pub fn with_alerts(location: impl Into<String>, alerts: Vec<WeatherAlert>) -> Self {
        let has_alerts = !alerts.is_empty();
        Self {
            location: location.into(),
            alerts,
            has_alerts,
            subscription_required: false,
            message: None,
        }
    }

    /// Geocoding found nothing for the location
    #[must_use]
    pub fn location_not_found(location: impl Into<String>) -> Self {
        Self {
            message: Some("No location found".to_string()),
            ..Self::with_alerts(location, Vec::new())
        }
    }

    /// The provider account cannot access alert data
    #[must_use]
    pub fn subscription_required(location: impl Into<String>) -> Self {
        Self {
            subscription_required: true,
            message: Some("Weather alerts require OpenWeather paid subscription".to_string()),
            ..Self::with_alerts(location, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_alerts_follows_alert_list() {
        let alert = WeatherAlert {
            event: "Flood Watch".to_string(),
            description: "Rising rivers".to_string(),
            start: "2024-05-01T10:00:00+00:00".to_string(),
            end: "2024-05-01T22:00:00+00:00".to_string(),
            sender: "NWS".to_string(),
        };
        assert!(AlertReport::with_alerts("Boston", vec![alert]).has_alerts);
        assert!(!AlertReport::with_alerts("Boston", Vec::new()).has_alerts);
    }

    #[test]
    fn test_subscription_flag_serialization() {
        let report = AlertReport::subscription_required("Boston");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["subscription_required"], true);
        assert_eq!(json["has_alerts"], false);

        let json = serde_json::to_value(AlertReport::location_not_found("Atlantis")).unwrap();
        assert!(json.get("subscription_required").is_none());
        assert_eq!(json["message"], "No location found");
    }
}
