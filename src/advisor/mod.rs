//! Rule-based safety advisor
//!
//! Text goes through the intent router, which either answers from the fixed
//! reply tables or pulls current conditions for an extracted place and turns
//! them into an advisory.

pub mod classifier;
pub mod content;
pub mod extractor;
pub mod matcher;
pub mod renderer;
pub mod router;

pub use classifier::{Advisory, HazardCategory, classify};
pub use content::SafetyTopic;
pub use extractor::extract;
pub use matcher::{KeywordMatcher, Matcher, PatternMatcher};
pub use renderer::{AdvisoryMessage, render, render_failure, render_outcome, wrap_travel};
pub use router::{Chooser, Intent, IntentRouter, detect_intent, random_chooser};
