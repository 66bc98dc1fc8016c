//! Hazard classification of a weather observation

use std::fmt;

use serde::Serialize;

use super::content::advisory_text;
use super::matcher::{KeywordMatcher, Matcher};
use crate::models::WeatherObservation;

const RAIN: KeywordMatcher = KeywordMatcher::new(&["rain", "drizzle", "shower"]);
const HEAVY_RAIN: KeywordMatcher = KeywordMatcher::new(&["heavy", "thunderstorm"]);
const SNOW: KeywordMatcher = KeywordMatcher::new(&["snow", "blizzard"]);
const HEAVY_SNOW: KeywordMatcher = KeywordMatcher::new(&["blizzard", "heavy"]);
const STORM: KeywordMatcher = KeywordMatcher::new(&["storm", "thunder"]);
const FOG: KeywordMatcher = KeywordMatcher::new(&["fog", "mist"]);
const DENSE_FOG: KeywordMatcher = KeywordMatcher::new(&["dense", "thick"]);

const EXTREME_HEAT_ABOVE: f64 = 35.0;
const HEAT_ABOVE: f64 = 30.0;
const EXTREME_COLD_BELOW: f64 = -10.0;
const COLD_BELOW: f64 = 0.0;
const WINDY_ABOVE: f64 = 15.0;
const DANGEROUS_WIND_ABOVE: f64 = 20.0;

/// The dominant weather risk of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardCategory {
    Rain,
    Snow,
    Storm,
    Fog,
    ExtremeHeat,
    Heat,
    ExtremeCold,
    Cold,
    Windy,
    Normal,
}

impl HazardCategory {
    pub const ALL: [HazardCategory; 10] = [
        HazardCategory::Rain,
        HazardCategory::Snow,
        HazardCategory::Storm,
        HazardCategory::Fog,
        HazardCategory::ExtremeHeat,
        HazardCategory::Heat,
        HazardCategory::ExtremeCold,
        HazardCategory::Cold,
        HazardCategory::Windy,
        HazardCategory::Normal,
    ];

    /// Human readable name used inside advisory sentences
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HazardCategory::Rain => "rain",
            HazardCategory::Snow => "snow",
            HazardCategory::Storm => "storm",
            HazardCategory::Fog => "fog",
            HazardCategory::ExtremeHeat => "extreme heat",
            HazardCategory::Heat => "heat",
            HazardCategory::ExtremeCold => "extreme cold",
            HazardCategory::Cold => "cold",
            HazardCategory::Windy => "windy",
            HazardCategory::Normal => "normal",
        }
    }
}

impl fmt::Display for HazardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier verdict plus the advice that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub category: HazardCategory,
    pub travel_safe: bool,
    /// Empty when travel is safe
    pub travel_warning: &'static str,
    pub safety_tips: &'static [&'static str],
    pub alternative_actions: &'static [&'static str],
}

impl Advisory {
    fn new(category: HazardCategory, travel_safe: bool) -> Self {
        let text = advisory_text(category, travel_safe);
        Self {
            category,
            travel_safe,
            travel_warning: text.travel_warning,
            safety_tips: text.safety_tips,
            alternative_actions: text.alternative_actions,
        }
    }
}

/// Maps an observation to exactly one hazard category.
///
/// Description keywords always win over temperature and wind; the first
/// matching branch decides.
#[must_use]
pub fn classify(observation: &WeatherObservation) -> Advisory {
    let description = observation.description.to_lowercase();
    let temperature = observation.temperature;
    let wind_speed = observation.wind_speed;

    let (category, travel_safe) = if RAIN.is_match(&description) {
        (HazardCategory::Rain, !HEAVY_RAIN.is_match(&description))
    } else if SNOW.is_match(&description) {
        (HazardCategory::Snow, !HEAVY_SNOW.is_match(&description))
    } else if STORM.is_match(&description) {
        (HazardCategory::Storm, false)
    } else if FOG.is_match(&description) {
        (HazardCategory::Fog, !DENSE_FOG.is_match(&description))
    } else if temperature > EXTREME_HEAT_ABOVE {
        (HazardCategory::ExtremeHeat, false)
    } else if temperature > HEAT_ABOVE {
        (HazardCategory::Heat, true)
    } else if temperature < EXTREME_COLD_BELOW {
        (HazardCategory::ExtremeCold, false)
    } else if temperature < COLD_BELOW {
        (HazardCategory::Cold, true)
    } else if wind_speed > WINDY_ABOVE {
        (HazardCategory::Windy, wind_speed <= DANGEROUS_WIND_ABOVE)
    } else {
        (HazardCategory::Normal, true)
    };

    tracing::debug!(%category, travel_safe, "classified observation");
    Advisory::new(category, travel_safe)
}
