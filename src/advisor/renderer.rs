//! Plain-text advisory layout

use std::fmt;

use super::classifier::Advisory;
use super::content::TRAVEL_ADVICE_FOOTER;
use crate::AdvisorError;
use crate::models::WeatherObservation;

/// Observation and advisory rendered as the multi-section chatbot reply.
pub struct AdvisoryMessage<'a> {
    observation: &'a WeatherObservation,
    advisory: &'a Advisory,
}

impl<'a> AdvisoryMessage<'a> {
    #[must_use]
    pub fn new(observation: &'a WeatherObservation, advisory: &'a Advisory) -> Self {
        Self {
            observation,
            advisory,
        }
    }
}

impl fmt::Display for AdvisoryMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = self.observation;
        let advisory = self.advisory;

        writeln!(f, "📍 **Weather in {}, {}**", obs.location, obs.country)?;
        writeln!(f)?;
        writeln!(
            f,
            "🌡️ Current temperature: {}°C (feels like {}°C)",
            obs.rounded_temperature(),
            obs.rounded_feels_like()
        )?;
        writeln!(f, "💧 Humidity: {}%", obs.humidity)?;
        writeln!(f, "💨 Wind: {}", obs.format_wind())?;
        writeln!(f, "☁️ Conditions: {}", obs.format_description())?;
        writeln!(f)?;

        writeln!(f, "🛡️ **Safety Tips**:")?;
        for tip in advisory.safety_tips {
            writeln!(f, "• {tip}")?;
        }
        writeln!(f)?;

        writeln!(f, "🚗 **Travel Recommendation**:")?;
        if advisory.travel_safe {
            writeln!(f, "• Travel appears generally safe at this time.")?;
            writeln!(f, "• Normal precautions are advised.")?;
            writeln!(f, "• Stay alert to changing weather conditions.")?;
        } else {
            writeln!(
                f,
                "• ⚠️ Travel not recommended due to {} conditions.",
                advisory.category
            )?;
            writeln!(f, "• {}", advisory.travel_warning)?;
            writeln!(f, "• If travel is absolutely necessary, exercise extreme caution.")?;
        }
        writeln!(f)?;

        writeln!(f, "💡 **Recommended Actions**:")?;
        for action in advisory.alternative_actions {
            writeln!(f, "• {action}")?;
        }
        Ok(())
    }
}

#[must_use]
pub fn render(observation: &WeatherObservation, advisory: &Advisory) -> String {
    AdvisoryMessage::new(observation, advisory).to_string()
}

/// One-line apology used instead of the full layout when the fetch failed.
#[must_use]
pub fn render_failure(error: &AdvisorError) -> String {
    format!("Sorry, I couldn't get weather information: {error}")
}

/// Renders either outcome of a weather fetch.
#[must_use]
pub fn render_outcome(outcome: &crate::Result<WeatherObservation>) -> String {
    match outcome {
        Ok(observation) => render(observation, &super::classify(observation)),
        Err(error) => render_failure(error),
    }
}

/// Wraps a rendered advisory with the travel assessment header and footer.
///
/// The verdict comes from the same advisory the body was rendered from.
#[must_use]
pub fn wrap_travel(observation: &WeatherObservation, advisory: &Advisory, body: &str) -> String {
    let verdict = if advisory.travel_safe {
        format!(
            "✅ **TRAVEL IS GENERALLY SAFE** under the current {} conditions.",
            advisory.category
        )
    } else {
        format!(
            "⚠️ **TRAVEL IS NOT RECOMMENDED** due to {} conditions.",
            advisory.category
        )
    };

    format!(
        "**🚗 TRAVEL SAFETY ASSESSMENT FOR {upper} 🚗**\n\n\
         You asked about travel safety in {location}. Based on current weather conditions, here is my assessment:\n\n\
         {verdict}\n\n\
         Below is the detailed weather information and safety recommendations:\n\n\
         {body}{TRAVEL_ADVICE_FOOTER}",
        upper = observation.location.to_uppercase(),
        location = observation.location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::classify;

    fn observation(description: &str, temperature: f64) -> WeatherObservation {
        WeatherObservation::new("Boston", "US", temperature, 21.2, 65, 3.6, description)
    }

    #[test]
    fn renders_all_sections_in_order() {
        let obs = observation("clear sky", 22.6);
        let text = render(&obs, &classify(&obs));

        assert!(text.starts_with("📍 **Weather in Boston, US**\n\n"));
        assert!(text.contains("🌡️ Current temperature: 23°C (feels like 21°C)\n"));
        assert!(text.contains("💧 Humidity: 65%\n"));
        assert!(text.contains("💨 Wind: 3.6 m/s\n"));
        assert!(text.contains("☁️ Conditions: Clear sky\n\n"));

        let tips = text.find("🛡️ **Safety Tips**:").unwrap();
        let travel = text.find("🚗 **Travel Recommendation**:").unwrap();
        let actions = text.find("💡 **Recommended Actions**:").unwrap();
        assert!(tips < travel && travel < actions);
        assert!(text.contains("• Travel appears generally safe at this time.\n"));
        assert!(text.ends_with("• Monitor weather changes throughout the day\n"));
    }

    #[test]
    fn unsafe_travel_names_category_and_warning() {
        let obs = observation("heavy snow", -4.0);
        let text = render(&obs, &classify(&obs));

        assert!(text.contains("• ⚠️ Travel not recommended due to snow conditions.\n"));
        assert!(text.contains(
            "• Heavy snow creates hazardous road conditions and poor visibility.\n"
        ));
        assert!(text.contains("• If travel is absolutely necessary, exercise extreme caution.\n"));
    }

    #[test]
    fn failure_renders_single_line() {
        let error = AdvisorError::provider(404, "city not found");
        let text = render_outcome(&Err(error));
        assert_eq!(
            text,
            "Sorry, I couldn't get weather information: Provider error (404): city not found"
        );
    }

    #[test]
    fn travel_wrapper_uses_advisory_verdict() {
        let obs = observation("thunderstorm", 20.0);
        let advisory = classify(&obs);
        let body = render(&obs, &advisory);
        let text = wrap_travel(&obs, &advisory, &body);

        assert!(text.starts_with("**🚗 TRAVEL SAFETY ASSESSMENT FOR BOSTON 🚗**\n\n"));
        assert!(text.contains("⚠️ **TRAVEL IS NOT RECOMMENDED** due to storm conditions.\n\n"));
        assert!(text.contains(&body));
        assert!(text.ends_with(TRAVEL_ADVICE_FOOTER));
    }

    #[test]
    fn travel_wrapper_safe_verdict() {
        let obs = observation("few clouds", 18.0);
        let advisory = classify(&obs);
        let text = wrap_travel(&obs, &advisory, "body");
        assert!(text.contains("✅ **TRAVEL IS GENERALLY SAFE** under the current normal conditions.\n\n"));
    }

    #[test]
    fn travel_wrapper_exact_layout() {
        let obs = observation("few clouds", 18.0);
        let advisory = classify(&obs);
        let expected = format!(
            "**🚗 TRAVEL SAFETY ASSESSMENT FOR BOSTON 🚗**\n\n\
             You asked about travel safety in Boston. Based on current weather conditions, here is my assessment:\n\n\
             ✅ **TRAVEL IS GENERALLY SAFE** under the current normal conditions.\n\n\
             Below is the detailed weather information and safety recommendations:\n\n\
             BODY{}",
            TRAVEL_ADVICE_FOOTER
        );
        assert_eq!(wrap_travel(&obs, &advisory, "BODY"), expected);
    }
}
