use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::store::application::ports::outgoing::CollectionStore;
use crate::modules::timeline::application::loader::TIMELINE_COLLECTION;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the remote collection store
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_status = match data.store.count(TIMELINE_COLLECTION).await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            store: store_status,
        })
    }
}
