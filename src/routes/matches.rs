use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    BuildPoolsRequest, BuildPoolsResponse, ErrorResponse, FindMatchesRequest,
    FindMatchesResponse, HealthResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Matcher built from server configuration; used when a request carries
    /// no inline options
    pub matcher: Matcher,
}

/// Configure all pooling/matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/pools/build", web::post().to(build_pools))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

// Requests may override the configured options wholesale; absent JSON keys
// inside `options` still fall back to the documented defaults field by field.
fn matcher_for(state: &AppState, options: Option<crate::models::MatchOptions>) -> Matcher {
    match options {
        Some(opts) => Matcher::new(opts),
        None => state.matcher.clone(),
    }
}

/// Build pools endpoint
///
/// POST /api/v1/pools/build
///
/// Request body:
/// ```json
/// {
///   "shipments": [...],
///   "options": { "maxPoolSize": 3, "minPairScore": 0.45 }
/// }
/// ```
async fn build_pools(
    state: web::Data<AppState>,
    req: web::Json<BuildPoolsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for build_pools request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    tracing::info!("Building pools for {} shipments", req.shipments.len());

    let matcher = matcher_for(&state, req.options);
    let pools = matcher.cluster(&req.shipments);

    tracing::debug!("Built {} pools from {} shipments", pools.len(), req.shipments.len());

    HttpResponse::Ok().json(BuildPoolsResponse {
        total_shipments: req.shipments.len(),
        pools,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "shipments": [...],
///   "carriers": [...],
///   "options": { "topK": 3 }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    tracing::info!(
        "Matching {} shipments against {} carriers",
        req.shipments.len(),
        req.carriers.len()
    );

    let matcher = matcher_for(&state, req.options);
    let result = matcher.find_matches(&req.shipments, &req.carriers);

    tracing::info!(
        "Returning {} matches across {} pools",
        result.matches.len(),
        result.pools.len()
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        pools: result.pools,
        matches: result.matches,
        total_shipments: result.total_shipments,
        total_carriers: result.total_carriers,
    })
}
