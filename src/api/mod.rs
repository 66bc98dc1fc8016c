use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::{
    AdvisorError,
    advisor::IntentRouter,
    models::{AlertReport, Forecast, WeatherObservation},
    weather::WeatherProvider,
};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub chatbot: IntentRouter,
    pub default_location: String,
    pub forecast_days: u8,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        default_location: impl Into<String>,
        forecast_days: u8,
    ) -> Self {
        Self {
            chatbot: IntentRouter::new(provider.clone()),
            provider,
            default_location: default_location.into(),
            forecast_days,
        }
    }

    #[must_use]
    pub fn with_chatbot(mut self, chatbot: IntentRouter) -> Self {
        self.chatbot = chatbot;
        self
    }

    fn location(&self, requested: Option<String>) -> String {
        requested
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.default_location.clone())
    }
}

#[derive(Deserialize)]
pub struct LocationQuery {
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub location: Option<String>,
    /// Kept as text so a bad value falls back to the default instead of failing
    pub days: Option<String>,
}

impl ForecastQuery {
    /// Requested day count clamped to the feed's 1..=5 range; unparsable input gives `default`.
    fn days(&self, default: u8) -> u8 {
        self.days
            .as_deref()
            .and_then(|days| days.trim().parse::<u64>().ok())
            .unwrap_or(u64::from(default))
            .clamp(1, 5) as u8
    }
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Collaborator failure rendered as `{"error": ...}`.
pub struct ApiError(AdvisorError);

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match self.0 {
            AdvisorError::MalformedInput { message } => message,
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/forecast", get(get_forecast))
        .route("/alerts", get(get_alerts))
        .route("/chatbot", post(chat))
        .with_state(state)
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<WeatherObservation>, ApiError> {
    let location = state.location(query.location);
    let observation = state.provider.fetch_current(&location).await.map_err(|e| {
        error!(%location, error = %e, "error fetching weather data");
        e
    })?;
    Ok(Json(observation))
}

async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Forecast>, ApiError> {
    let days = query.days(state.forecast_days);
    let location = state.location(query.location);
    let forecast = state
        .provider
        .fetch_forecast(&location, days)
        .await
        .map_err(|e| {
            error!(%location, error = %e, "error fetching forecast data");
            e
        })?;
    Ok(Json(forecast))
}

async fn get_alerts(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<AlertReport>, ApiError> {
    let location = state.location(query.location);
    let report = state.provider.fetch_alerts(&location).await.map_err(|e| {
        error!(%location, error = %e, "error fetching alerts data");
        e
    })?;
    Ok(Json(report))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(reason = %rejection.body_text(), "failed to parse chatbot request");
        AdvisorError::malformed_input("Invalid JSON data")
    })?;

    let response = state.chatbot.route(&request.message).await;
    Ok(Json(ChatResponse { response }))
}
