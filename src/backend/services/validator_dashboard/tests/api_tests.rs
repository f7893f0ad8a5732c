use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;
use std::sync::Arc;

use validator_dashboard::{
    api::dashboard_routes, repositories::FixtureSource, DashboardService, FetchConfig,
};

fn instant_service() -> web::Data<DashboardService> {
    web::Data::new(DashboardService::with_fixtures(FetchConfig::instant()))
}

#[actix_web::test]
async fn serves_validator_data_as_camel_case_json() {
    let app =
        test::init_service(App::new().app_data(instant_service()).service(dashboard_routes()))
            .await;

    let req = test::TestRequest::get().uri("/api/validators").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["summary"]["votingPower"], 1234567);
    assert_eq!(body["summary"]["status"], "active");
    assert_eq!(body["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(body["nodes"][1]["network"], "Osmosis");
    assert_eq!(body["nodes"][2]["lastSeen"], "15 minutes ago");
    assert_eq!(body["networks"][3]["type"], "testnet");
}

#[actix_web::test]
async fn serves_networks_and_snapshots() {
    let app =
        test::init_service(App::new().app_data(instant_service()).service(dashboard_routes()))
            .await;

    let req = test::TestRequest::get().uri("/api/networks").to_request();
    let networks: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(networks[0]["id"], "cosmoshub-4");
    assert_eq!(networks.as_array().unwrap().len(), 4);

    let req = test::TestRequest::get().uri("/api/snapshots").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["snapshots"][2]["size"], "1.2 GB");
    assert_eq!(body["snapshots"][0]["downloadUrl"], "#");
}

#[actix_web::test]
async fn source_outage_maps_to_service_unavailable() {
    let service = DashboardService::new(Arc::new(FixtureSource::failing_for(1)), FetchConfig::instant());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .service(dashboard_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/snapshots").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Failed to load snapshot data. Please try again later."
    );
}

#[actix_web::test]
async fn timeout_maps_to_gateway_timeout() {
    let config = FetchConfig {
        timeout_ms: 10,
        ..FetchConfig::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(DashboardService::with_fixtures(config)))
            .service(dashboard_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/validators").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}
