//! HTTP handlers for the cost report.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::Configuration;
use crate::core::{AppState, Scenario};
use crate::processing::PricingConstants;
use crate::reporting::{ScenarioReport, render_page};
use crate::utils::OutputFormat;

/// Query string accepted by the report page
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InputParameter {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub configuration: Configuration,
    #[serde(rename = "inputParameters")]
    pub input_parameters: Vec<InputParameter>,
    pub pricing: PricingConstants,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "uptimeSecs")]
    pub uptime_secs: u64,
    #[serde(rename = "scenarioCount")]
    pub scenario_count: usize,
}

pub async fn redirect_to_app() -> Redirect {
    Redirect::temporary("/app/")
}

/// Serves the report as HTML (default), plain text or JSON.
pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let format = match query.format.as_deref().map(str::parse::<OutputFormat>).transpose() {
        Ok(format) => format.unwrap_or_default(),
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };
    debug!("Rendering report as {:?}", format);

    match format {
        OutputFormat::Html => Html(render_page(state.properties(), state.scenarios())).into_response(),
        OutputFormat::Text => (
            [(header::CONTENT_TYPE, format.content_type())],
            ScenarioReport::new(state.properties(), state.scenarios()).to_string(),
        )
            .into_response(),
        OutputFormat::Json => Json(state.scenarios()).into_response(),
    }
}

pub async fn scenarios(State(state): State<AppState>) -> Json<Vec<Scenario>> {
    Json(state.scenarios().to_vec())
}

pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let input_parameters = state
        .properties()
        .iter()
        .map(|(key, value)| InputParameter { key: key.to_string(), value })
        .collect();

    Json(ConfigResponse {
        configuration: state.config().clone(),
        input_parameters,
        pricing: *state.cost_model().constants(),
    })
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        scenario_count: state.scenarios().len(),
    };

    (StatusCode::OK, Json(health))
}
