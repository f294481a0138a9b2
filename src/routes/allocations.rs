use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{
    distance::location_distance,
    travel::{traffic_factor, travel_time_minutes},
    AllocationError, Allocator,
};
use crate::models::{
    AllocationRequest, ErrorResponse, HealthResponse, RankedHospital, RankingResponse,
    SelectionResponse, TravelEstimateRequest, TravelEstimateResponse,
};
use crate::services::{current_hour, TrafficSampler};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub allocator: Allocator,
    pub traffic: Arc<TrafficSampler>,
    pub default_speed_kph: f64,
}

/// Configure all allocation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/allocations/select", web::post().to(select_hospital))
        .route("/allocations/rank", web::post().to(rank_hospitals))
        .route("/travel/estimate", web::post().to(estimate_travel));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn allocation_failed(err: AllocationError) -> HttpResponse {
    tracing::warn!("Allocation rejected: {}", err);
    match err {
        AllocationError::InvalidInput(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid input".to_string(),
            message: err.to_string(),
            status_code: 400,
        }),
        AllocationError::DataInconsistency { .. } => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Inconsistent hospital data".to_string(),
                message: err.to_string(),
                status_code: 422,
            })
        }
    }
}

/// Select the best hospital
///
/// POST /api/v1/allocations/select
///
/// Request body:
/// ```json
/// {
///   "patient": {"location": {"lat": 0.0, "lng": 0.0}, "severity": "Critical",
///               "condition": "Cardiac", "requiresIcu": true},
///   "hospitals": [{"id": "H1", "location": {...}, "totalBeds": 200, ...}]
/// }
/// ```
async fn select_hospital(
    state: web::Data<AppState>,
    req: web::Json<AllocationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate_all() {
        return validation_failed(errors);
    }

    let allocation_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "Allocating {} patient ({}) across {} hospitals [{}]",
        req.patient.severity,
        req.patient.condition,
        req.hospitals.len(),
        allocation_id
    );

    let result = match state.allocator.select(&req.patient, &req.hospitals) {
        Ok(result) => result,
        Err(e) => return allocation_failed(e),
    };

    let response = SelectionResponse {
        allocation_id,
        hospital_id: result.selection.map(|s| s.hospital.id.clone()),
        score: result.score(),
        distance_km: result.selection.map(|s| s.distance_km),
        evaluated: result.evaluated,
        eligible: result.eligible,
    };

    match &response.hospital_id {
        Some(id) => tracing::info!(
            "Selected hospital {} with score {:.3} [{}]",
            id,
            response.score,
            response.allocation_id
        ),
        None => tracing::info!(
            "No eligible hospital among {} candidates [{}]",
            response.evaluated,
            response.allocation_id
        ),
    }

    HttpResponse::Ok().json(response)
}

/// Rank every eligible hospital
///
/// POST /api/v1/allocations/rank
///
/// Same body as the select endpoint.
async fn rank_hospitals(
    state: web::Data<AppState>,
    req: web::Json<AllocationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate_all() {
        return validation_failed(errors);
    }

    let ranking = match state.allocator.rank(&req.patient, &req.hospitals) {
        Ok(ranking) => ranking,
        Err(e) => return allocation_failed(e),
    };

    let response = RankingResponse {
        allocation_id: uuid::Uuid::new_v4().to_string(),
        ranking: ranking
            .iter()
            .map(|scored| RankedHospital {
                hospital_id: scored.hospital.id.clone(),
                distance_km: scored.distance_km,
                distance_score: scored.breakdown.distance_score,
                capacity_score: scored.breakdown.capacity_score,
                specialization_score: scored.breakdown.specialization_score,
                score: scored.score(),
            })
            .collect(),
        evaluated: req.hospitals.len(),
    };

    tracing::info!(
        "Ranked {} of {} hospitals [{}]",
        response.ranking.len(),
        response.evaluated,
        response.allocation_id
    );

    HttpResponse::Ok().json(response)
}

/// Estimate travel time between two points
///
/// POST /api/v1/travel/estimate
///
/// Request body:
/// ```json
/// {
///   "from": {"lat": 0.0, "lng": 0.0},
///   "to": {"lat": 0.0, "lng": 0.0},
///   "speedKph": 40.0,
///   "hour": 8,
///   "trafficSample": 0.5
/// }
/// ```
/// `speedKph`, `hour` and `trafficSample` are optional.
async fn estimate_travel(
    state: web::Data<AppState>,
    req: web::Json<TravelEstimateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let hour = req.hour.unwrap_or_else(current_hour);
    let sample = req.traffic_sample.unwrap_or_else(|| state.traffic.uniform());
    let speed_kph = req.speed_kph.unwrap_or(state.default_speed_kph);

    let distance_km = location_distance(&req.from, &req.to);
    let estimate = traffic_factor(hour, sample).and_then(|factor| {
        travel_time_minutes(distance_km, speed_kph, factor).map(|minutes| (factor, minutes))
    });

    match estimate {
        Ok((factor, minutes)) => {
            tracing::debug!(
                "Travel estimate: {:.2} km at {} km/h, factor {:.3} -> {:.1} min",
                distance_km,
                speed_kph,
                factor,
                minutes
            );
            HttpResponse::Ok().json(TravelEstimateResponse {
                distance_km,
                traffic_factor: factor,
                travel_time_minutes: minutes,
            })
        }
        Err(e) => allocation_failed(e),
    }
}
