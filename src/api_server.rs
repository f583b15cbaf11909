// Axum API Server Module
//
// Purpose: REST endpoints for crop recommendations and yield prediction.
// The engine is synchronous and cheap (fixed catalog, fixed arithmetic), so
// handlers call it inline instead of going through spawn_blocking.

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use crate::conditions::{FieldConditions, DEFAULT_MOISTURE, DEFAULT_PH, DEFAULT_TEMPERATURE};

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::engine::AdvisoryEngine;

#[cfg(feature = "api")]
use crate::error::InvalidInputError;

#[cfg(feature = "api")]
use crate::locale::Language;

#[cfg(feature = "api")]
use crate::suitability::SuitabilityResult;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone, Debug)]
pub struct AppState {
    pub engine: AdvisoryEngine,
    /// Reject physically impossible readings with 400 instead of scoring them
    pub strict_validation: bool,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing advisory engine...");
        let engine = config.build_engine()?;
        tracing::info!("Loaded {} crop profiles", engine.catalog().len());

        Ok(Self {
            engine,
            strict_validation: config.strict_validation,
        })
    }

    pub fn from_engine(engine: AdvisoryEngine, strict_validation: bool) -> Self {
        Self { engine, strict_validation }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Service index
        .route("/api/", get(root))

        // Engine endpoints
        .route("/api/crops/recommendations", get(get_crop_recommendations))
        .route("/api/yield/predict", get(predict_yield))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "KrishiMitra API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/crops/recommendations",
            "/api/yield/predict",
        ]
    }))
}

/// Ranked crop suitability for the given soil readings
///
/// GET /api/crops/recommendations?ph=6.5&moisture=65&lang=te
#[cfg(feature = "api")]
async fn get_crop_recommendations(
    State(state): State<AppState>,
    params: Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = params?;
    let ph = params.ph.unwrap_or(DEFAULT_PH);
    let moisture = params.moisture.unwrap_or(DEFAULT_MOISTURE);
    let language = params.lang.as_deref().map(Language::from_code).unwrap_or_default();

    // Temperature plays no part in ranking; validate with the default
    FieldConditions::new(moisture, ph, DEFAULT_TEMPERATURE).validate(state.strict_validation)?;

    let ranked = state.engine.list_recommendations(ph, moisture);
    tracing::debug!(
        "Recommendations for pH {} / moisture {}: top crop {:?}",
        ph,
        moisture,
        ranked.top_3.first().map(|r| r.crop_name())
    );

    let recommendations: Vec<serde_json::Value> =
        ranked.top_3.iter().map(|r| crop_json(r, language)).collect();
    let all_crops: Vec<serde_json::Value> =
        ranked.all.iter().map(|r| crop_json(r, language)).collect();

    Ok(Json(serde_json::json!({
        "current_conditions": {
            "ph": ph,
            "moisture": moisture,
        },
        "recommendations": recommendations,
        "all_crops": all_crops,
    })))
}

/// Yield prediction for one crop
///
/// GET /api/yield/predict?crop=Rice&moisture=65&ph=6.5&temperature=30
#[cfg(feature = "api")]
async fn predict_yield(
    State(state): State<AppState>,
    params: Result<Query<YieldQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = params?;
    let crop = params
        .crop
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'crop' is required".to_string()))?;

    let conditions = FieldConditions::new(
        params.moisture.unwrap_or(DEFAULT_MOISTURE),
        params.ph.unwrap_or(DEFAULT_PH),
        params.temperature.unwrap_or(DEFAULT_TEMPERATURE),
    );
    conditions.validate(state.strict_validation)?;

    let prediction = state.engine.predict(
        crop,
        conditions.moisture,
        conditions.ph,
        conditions.temperature,
    );

    if !prediction.known_crop {
        tracing::info!("Yield requested for unknown crop '{}', used default base yield", crop);
    }

    Ok(Json(serde_json::json!({
        "crop": prediction.crop,
        "predicted_yield": prediction.predicted_yield_text(),
        "confidence": prediction.confidence,
        "current_conditions": {
            "moisture": conditions.moisture,
            "ph": conditions.ph,
            "temperature": conditions.temperature,
        },
        "recommendations": prediction.recommendation_texts(),
    })))
}

/// One ranked crop in the wire format the mobile client reads
#[cfg(feature = "api")]
fn crop_json(result: &SuitabilityResult<'_>, language: Language) -> serde_json::Value {
    let crop = result.crop;
    serde_json::json!({
        "crop_name": crop.name,
        "crop_name_telugu": crop.names.te,
        "crop_name_hindi": crop.names.hi,
        "display_name": crop.display_name(language),
        "suitable_ph_min": crop.ph_min,
        "suitable_ph_max": crop.ph_max,
        "moisture_requirement": crop.moisture_requirement(),
        "season": crop.season,
        "expected_yield": crop.expected_yield_text,
        "market_price": crop.market_price_text,
        "suitability_score": result.suitability_score(),
    })
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct RecommendationQuery {
    ph: Option<f64>,
    moisture: Option<f64>,
    lang: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct YieldQuery {
    crop: Option<String>,
    moisture: Option<f64>,
    ph: Option<f64>,
    temperature: Option<f64>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    InvalidInput(InvalidInputError),
}

#[cfg(feature = "api")]
impl From<InvalidInputError> for AppError {
    fn from(err: InvalidInputError) -> Self {
        AppError::InvalidInput(err)
    }
}

// Malformed query strings (e.g. `ph=acidic`) get the same JSON body as other 400s
#[cfg(feature = "api")]
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidInput(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        tracing::debug!("Rejecting request: {}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
