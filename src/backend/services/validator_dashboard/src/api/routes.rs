use actix_web::{web, HttpResponse, Scope};
use serde::Serialize;

use crate::{
    models::Snapshot, services::dashboard_service::DashboardService, utils::errors::FetchError,
};

pub fn dashboard_routes() -> Scope {
    web::scope("/api")
        .route("/validators", web::get().to(get_validator_data))
        .route("/networks", web::get().to(get_network_data))
        .route("/snapshots", web::get().to(get_snapshot_data))
}

#[derive(Debug, Serialize)]
struct SnapshotsResponse {
    snapshots: Vec<Snapshot>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(err: &FetchError) -> HttpResponse {
    let mut response = if err.is_timeout() {
        HttpResponse::GatewayTimeout()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response.json(ErrorResponse {
        error: err.user_message(),
    })
}

async fn get_validator_data(service: web::Data<DashboardService>) -> HttpResponse {
    match service.fetch_validator_data().await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => error_response(&e),
    }
}

async fn get_network_data(service: web::Data<DashboardService>) -> HttpResponse {
    match service.fetch_network_data().await {
        Ok(networks) => HttpResponse::Ok().json(networks),
        Err(e) => error_response(&e),
    }
}

async fn get_snapshot_data(service: web::Data<DashboardService>) -> HttpResponse {
    match service.fetch_snapshot_data().await {
        Ok(snapshots) => HttpResponse::Ok().json(SnapshotsResponse { snapshots }),
        Err(e) => error_response(&e),
    }
}
