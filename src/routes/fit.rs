use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::FitEvaluator;
use crate::models::{
    CompareSizesRequest, ErrorResponse, EvaluateFitRequest, FabricBandResponse, FabricsResponse, HealthResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: FitEvaluator,
    /// Fallback confidence when a request supplies none
    pub default_confidence: String,
}

/// Configure all fit-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/fabrics", web::get().to(list_fabrics))
        .route("/fit/evaluate", web::post().to(evaluate_fit))
        .route("/fit/compare", web::post().to(compare_sizes));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Active fabric bands, for range display in the UI
///
/// GET /api/v1/fabrics
async fn list_fabrics(state: web::Data<AppState>) -> impl Responder {
    let fabrics = state
        .evaluator
        .bands()
        .iter()
        .map(|(fabric, band)| FabricBandResponse { fabric, band: *band })
        .collect();

    HttpResponse::Ok().json(FabricsResponse { fabrics })
}

/// Evaluate one size
///
/// POST /api/v1/fit/evaluate
///
/// Request body:
/// ```json
/// {
///   "profile": { "chest": 90, "waist": 80, "armLength": 60 },
///   "sizeChart": { "M": { "size": "M", "chest": 91, "arm_length": 61 } },
///   "sizeLabel": "M",
///   "fabricType": "normal",
///   "aiConfidence": "Good"
/// }
/// ```
async fn evaluate_fit(state: web::Data<AppState>, req: web::Json<EvaluateFitRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return validation_error(errors);
    }

    let fabric_type = req.fabric_type.as_deref().unwrap_or("normal");
    let fallback = req.ai_confidence.as_deref().unwrap_or(state.default_confidence.as_str());

    match state
        .evaluator
        .evaluate_size(&req.profile, &req.size_chart, &req.size_label, fabric_type, fallback)
    {
        Some(evaluation) => {
            tracing::info!(
                "Evaluated size {} ({}): {}",
                evaluation.size_label,
                evaluation.fabric,
                evaluation.overall_confidence
            );
            HttpResponse::Ok().json(evaluation)
        }
        None => {
            tracing::info!("Size {} not found in chart", req.size_label);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Size not found".to_string(),
                message: format!("Size chart has no measurements for size {}", req.size_label),
                status_code: 404,
            })
        }
    }
}

/// Evaluate every size of a chart for side-by-side comparison
///
/// POST /api/v1/fit/compare
///
/// Request body:
/// ```json
/// {
///   "profile": { "chest": 90, "waist": 80 },
///   "sizeChart": { "S": { "chest": 85 }, "M": { "chest": 91 } },
///   "fabricType": "stretchy",
///   "aiConfidence": "Good",
///   "recommendedSize": "M"
/// }
/// ```
async fn compare_sizes(state: web::Data<AppState>, req: web::Json<CompareSizesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compare request: {:?}", errors);
        return validation_error(errors);
    }

    let fabric_type = req.fabric_type.as_deref().unwrap_or("normal");
    let fallback = req.ai_confidence.as_deref().unwrap_or(state.default_confidence.as_str());

    let comparison = state.evaluator.compare_sizes(
        &req.profile,
        &req.size_chart,
        fabric_type,
        fallback,
        req.recommended_size.as_deref(),
    );

    tracing::info!(
        "Compared {} sizes ({}), recommended: {:?}",
        comparison.sizes.len(),
        comparison.fabric,
        comparison.recommended_size
    );

    HttpResponse::Ok().json(comparison)
}
