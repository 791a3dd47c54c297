//! Web API module for ColorTool.
//!
//! This module exposes the converter over HTTP so other tools (design
//! linters, browser extensions) can share one implementation of the color
//! math.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/convert?input=..&from=..&mode=..` - Convert a color and score it
//! - `GET /api/contrast?color=..&against=..&mode=..` - Contrast of one color
//! - `GET /api/random?mode=..` - Random color, converted and scored
//! - `GET /api/reference` - The fixed reference colors

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::models::{Color, ContrastMode, ContrastReport, ParseColorError, INK, PANEL};
use crate::services::{ContrastSummary, Conversion, Field};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Mode from the query string, or the configured default.
    fn mode(&self, requested: Option<&str>) -> Result<ContrastMode, ApiRejection> {
        requested.map_or(Ok(self.config.contrast.default_mode), |value| {
            value
                .parse()
                .map_err(|e: String| bad_request("Invalid mode", e))
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query for `/api/convert`.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Color text in any supported notation.
    pub input: String,
    /// Force a notation instead of detecting it.
    pub from: Option<String>,
    /// Contrast role.
    pub mode: Option<String>,
}

/// Conversion of a submitted color.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Text as submitted.
    pub input: String,
    /// Notation the input was read as.
    pub source: Field,
    /// Converted values and contrast.
    #[serde(flatten)]
    pub conversion: Conversion,
}

/// Query for `/api/contrast`.
#[derive(Debug, Deserialize)]
pub struct ContrastQuery {
    /// Color to score.
    pub color: String,
    /// Optional second color instead of the mode's reference.
    pub against: Option<String>,
    /// Contrast role.
    pub mode: Option<String>,
}

/// Contrast of one color.
#[derive(Debug, Serialize)]
pub struct ContrastResponse {
    /// Scored color as `#RRGGBB`.
    pub color: String,
    /// Ratio and level.
    #[serde(flatten)]
    pub contrast: ContrastSummary,
}

/// Query for `/api/random`.
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Contrast role.
    pub mode: Option<String>,
}

/// One mode and the color it is scored against.
#[derive(Debug, Serialize)]
pub struct ModeReference {
    /// Contrast role.
    pub mode: ContrastMode,
    /// Reference color as `#RRGGBB`.
    pub reference: String,
}

/// The fixed reference colors.
#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    /// Dark panel color.
    pub panel: String,
    /// Light ink color.
    pub ink: String,
    /// Which reference each mode uses.
    pub modes: Vec<ModeReference>,
    /// Mode used when a request names none.
    pub default_mode: ContrastMode,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiRejection = (StatusCode, Json<ApiError>);

fn bad_request(error: &str, details: impl Into<String>) -> ApiRejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(error, details)),
    )
}

fn invalid_color(e: &ParseColorError) -> ApiRejection {
    bad_request("Invalid color", e.to_string())
}

/// Unwraps query parameters, reporting missing or malformed ones as JSON.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiRejection> {
    query
        .map(|Query(params)| params)
        .map_err(|e| bad_request("Invalid query", e.body_text()))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/convert - Convert a color to every notation.
async fn convert(
    State(state): State<AppState>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> Result<Json<ConvertResponse>, ApiRejection> {
    let query = query_params(query)?;
    let mode = state.mode(query.mode.as_deref())?;

    let (source, color) = match query.from.as_deref() {
        Some(format) => {
            let field: Field = format
                .parse()
                .map_err(|e: String| bad_request("Invalid format", e))?;
            let color = field.parse(&query.input).map_err(|e| invalid_color(&e))?;
            (field, color)
        }
        None => Field::detect(&query.input).ok_or_else(|| {
            invalid_color(&ParseColorError::Unrecognized(query.input.clone()))
        })?,
    };

    Ok(Json(ConvertResponse {
        input: query.input,
        source,
        conversion: Conversion::of(color, mode),
    }))
}

/// GET /api/contrast - Contrast ratio and level of one color.
async fn contrast(
    State(state): State<AppState>,
    query: Result<Query<ContrastQuery>, QueryRejection>,
) -> Result<Json<ContrastResponse>, ApiRejection> {
    let query = query_params(query)?;
    let mode = state.mode(query.mode.as_deref())?;
    let color: Color = query.color.parse().map_err(|e| invalid_color(&e))?;

    let report = match query.against.as_deref() {
        Some(other) => {
            let other: Color = other.parse().map_err(|e| invalid_color(&e))?;
            ContrastReport::against(color, other, mode)
        }
        None => ContrastReport::for_mode(color, mode),
    };

    Ok(Json(ContrastResponse {
        color: color.to_hex(),
        contrast: ContrastSummary::from(&report),
    }))
}

/// GET /api/random - A random color, converted and scored.
async fn random(
    State(state): State<AppState>,
    query: Result<Query<RandomQuery>, QueryRejection>,
) -> Result<Json<Conversion>, ApiRejection> {
    let query = query_params(query)?;
    let mode = state.mode(query.mode.as_deref())?;
    let color = Color::random(&mut rand::thread_rng());
    Ok(Json(Conversion::of(color, mode)))
}

/// GET /api/reference - The fixed reference colors.
async fn reference(State(state): State<AppState>) -> Json<ReferenceResponse> {
    let modes = [ContrastMode::Background, ContrastMode::Text]
        .into_iter()
        .map(|mode| ModeReference {
            mode,
            reference: mode.reference().to_hex(),
        })
        .collect();

    Json(ReferenceResponse {
        panel: PANEL.to_hex(),
        ink: INK.to_hex(),
        modes,
        default_mode: state.config.contrast.default_mode,
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Read-only API, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/convert", get(convert))
        .route("/api/contrast", get(contrast))
        .route("/api/random", get(random))
        .route("/api/reference", get(reference))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting ColorTool web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_config() {
        let mut config = Config::default();
        config.contrast.default_mode = ContrastMode::Text;
        let state = AppState::new(config);

        assert_eq!(state.mode(None).unwrap(), ContrastMode::Text);
        assert_eq!(
            state.mode(Some("background")).unwrap(),
            ContrastMode::Background
        );
    }

    #[test]
    fn test_invalid_mode_is_bad_request() {
        let state = AppState::new(Config::default());
        let (status, Json(body)) = state.mode(Some("sideways")).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid mode");
        assert!(body.details.unwrap().contains("sideways"));
    }

    #[test]
    fn test_invalid_color_carries_parse_message() {
        let (status, Json(body)) =
            invalid_color(&ParseColorError::InvalidHex("#GG0000".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.unwrap().contains("#GG0000"));
    }
}
