//! Intent detection and reply dispatch for the chatbot

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Local, TimeZone};
use rand::RngExt;
use tracing::{debug, instrument, warn};

use super::classifier::classify;
use super::content::{
    FAREWELLS, GENERAL_TIPS, GENERAL_WEATHER_GUIDANCE, GREETINGS, SafetyTopic,
    TRAVEL_LOCATION_PROMPT, UNKNOWN_RESPONSES,
};
use super::extractor;
use super::matcher::{KeywordMatcher, Matcher, PatternMatcher};
use super::renderer::{render, wrap_travel};
use crate::weather::WeatherProvider;

const WEATHER_TERMS: KeywordMatcher = KeywordMatcher::new(&[
    "weather",
    "temperature",
    "how is",
    "what's",
    "forecast",
    "conditions",
    "raining",
    "snowing",
]);

const TRAVEL_TERMS: KeywordMatcher = KeywordMatcher::new(&[
    "travel",
    "drive",
    "driving",
    "road",
    "trip",
    "commute",
    "journey",
    "safe to",
    "should i go",
    "commuting",
    "traffic",
    "roads",
    "drive to",
    "drive in",
    "driving to",
    "driving in",
    "travel to",
    "travel in",
    "traveling to",
    "traveling in",
    "safe for driving",
    "should i drive",
    "can i drive",
    "ok to drive",
    "okay to drive",
    "alright to drive",
]);

const GREETING_TERMS: KeywordMatcher = KeywordMatcher::new(&["hello", "hi", "hey", "greetings"]);
const FAREWELL_TERMS: KeywordMatcher = KeywordMatcher::new(&["bye", "goodbye", "see you", "thank"]);
const HELP_TERMS: KeywordMatcher =
    KeywordMatcher::new(&["help", "tips", "advice", "prepare", "emergency", "safety"]);
const GENERIC_WEATHER_TERMS: KeywordMatcher = KeywordMatcher::new(&[
    "weather",
    "forecast",
    "temperature",
    "climate",
    "rain",
    "snow",
    "wind",
]);

static TIME_PATTERN: LazyLock<PatternMatcher> = LazyLock::new(|| {
    PatternMatcher::new(r"\b(time|date|today|now)\b").expect("time pattern is valid")
});

/// Picks an index in `0..len` for a non-empty reply pool.
pub type Chooser = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Uniform random choice backed by the thread-local rng.
#[must_use]
pub fn random_chooser() -> Chooser {
    Arc::new(|len| rand::rng().random_range(0..len))
}

/// What a chat message is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Weather or travel question about a named place
    Conditions { location: String, travel: bool },
    TravelWithoutLocation,
    Greeting,
    Farewell,
    Help,
    Time,
    Hazard(SafetyTopic),
    GeneralWeather,
    Unknown,
}

/// Classifies a message; first matching rule wins.
#[must_use]
pub fn detect_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    let travel = TRAVEL_TERMS.is_match(&lower);

    if let Some(location) = extractor::extract(text) {
        if travel || WEATHER_TERMS.is_match(&lower) {
            return Intent::Conditions { location, travel };
        }
        debug!(%location, "location without weather or travel terms");
    }

    if travel {
        Intent::TravelWithoutLocation
    } else if GREETING_TERMS.is_match(&lower) {
        Intent::Greeting
    } else if FAREWELL_TERMS.is_match(&lower) {
        Intent::Farewell
    } else if HELP_TERMS.is_match(&lower) {
        Intent::Help
    } else if TIME_PATTERN.is_match(&lower) {
        Intent::Time
    } else if let Some(topic) = SafetyTopic::detect(&lower) {
        Intent::Hazard(topic)
    } else if GENERIC_WEATHER_TERMS.is_match(&lower) {
        Intent::GeneralWeather
    } else {
        Intent::Unknown
    }
}

/// Current time line with the standing reminder to watch forecasts.
#[must_use]
pub fn time_reply<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "It's currently {} on {}. Remember that weather conditions can change throughout the day, so stay updated with local forecasts.",
        now.format("%H:%M"),
        now.format("%A, %B %d, %Y")
    )
}

/// Stateless chatbot: every call sees only the current message.
#[derive(Clone)]
pub struct IntentRouter {
    provider: Arc<dyn WeatherProvider>,
    chooser: Chooser,
}

impl IntentRouter {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self::with_chooser(provider, random_chooser())
    }

    pub fn with_chooser(provider: Arc<dyn WeatherProvider>, chooser: Chooser) -> Self {
        Self { provider, chooser }
    }

    fn pick(&self, pool: &[&'static str]) -> String {
        let index = (self.chooser)(pool.len()).min(pool.len() - 1);
        pool[index].to_string()
    }

    /// Produces the reply for one message. Collaborator failures become an apology.
    #[instrument(skip(self))]
    pub async fn route(&self, text: &str) -> String {
        let intent = detect_intent(text);
        debug!(?intent, "detected intent");

        match intent {
            Intent::Conditions { location, travel } => self.conditions(&location, travel).await,
            Intent::TravelWithoutLocation => TRAVEL_LOCATION_PROMPT.to_string(),
            Intent::Greeting => self.pick(&GREETINGS),
            Intent::Farewell => self.pick(&FAREWELLS),
            Intent::Help => self.pick(&GENERAL_TIPS),
            Intent::Time => time_reply(&Local::now()),
            Intent::Hazard(topic) => self.pick(topic.tips()),
            Intent::GeneralWeather => GENERAL_WEATHER_GUIDANCE.to_string(),
            Intent::Unknown => self.pick(&UNKNOWN_RESPONSES),
        }
    }

    async fn conditions(&self, location: &str, travel: bool) -> String {
        let observation = match self.provider.fetch_current(location).await {
            Ok(observation) => observation,
            Err(e) => {
                warn!(%location, error = %e, "weather lookup failed");
                return format!(
                    "I'm sorry, I couldn't retrieve the weather information for {location}. Please check if the city name is correct or try again later."
                );
            }
        };

        let advisory = classify(&observation);
        let body = render(&observation, &advisory);
        if travel {
            wrap_travel(&observation, &advisory, &body)
        } else {
            body
        }
    }
}
