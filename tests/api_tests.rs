//! HTTP tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use fruit_sales_dashboard::{api, AppConfig, SalesLog};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig::default();
    let state = api::AppState {
        log: SalesLog::new(config.analysis.tracked_items.clone()).into_shared(),
        dashboard: Arc::new(config.dashboard_service()),
        eoq_defaults: config.eoq_defaults(),
    };
    api::router(state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

fn json_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn health_check_ok() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn empty_log_reports_no_data() {
    let app = app();

    let (status, body) = get(&app, "/api/analysis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["status"], "no_data");

    let (status, body) = get(&app, "/api/analysis/Apel/eoq").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json_body(&body)["code"], "NO_DATA");

    let (status, _) = get(&app, "/api/analysis/export").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_then_analyse() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Apel": 10.0, "Pisang": 3.0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&body)["record_count"], 1);

    let (status, _) = post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-02", "quantities": { "Apel": 20.0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/analysis").await;
    assert_eq!(status, StatusCode::OK);
    let view = json_body(&body);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["record_count"], 2);
    assert_eq!(view["metrics"].as_array().unwrap().len(), 6);

    let apel = &view["metrics"][0];
    assert_eq!(apel["item"], "Apel");
    assert_eq!(apel["total_sold"], 30.0);
    assert_eq!(apel["daily_average"], 15.0);
    assert_eq!(apel["weekly_average"], 105.0);
    assert_eq!(apel["reorder_point"], 30.0);
    assert_eq!(apel["stock_status"], "ok");
    assert_eq!(view["top_item"]["item"], "Apel");

    let chart = view["chart"].as_array().unwrap();
    assert_eq!(chart.last().unwrap()["item"], "Apel");

    let (status, body) = get(
        &app,
        "/api/analysis/Apel/eoq?ordering_cost=10000&holding_cost=500&horizon_days=5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let panel = json_body(&body);
    assert_eq!(panel["eoq"], 64.81);
    assert_eq!(panel["weekly_demand"], 105.0);
    assert_eq!(panel["projection"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn rejects_negative_quantity() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Apel": -1.0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_QUANTITY");

    let (_, body) = get(&app, "/api/sales").await;
    assert!(json_body(&body)["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn eoq_rejects_zero_holding_cost_and_unknown_item() {
    let app = app();
    post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Mangga": 4.0 } }),
    )
    .await;

    let (status, body) = get(&app, "/api/analysis/Mangga/eoq?holding_cost=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_PARAMETER");

    let (status, _) = get(&app, "/api/analysis/Durian/eoq").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tracks_new_item_and_exports_csv() {
    let app = app();

    let (status, body) = post_json(&app, "/api/items", json!({ "name": "Nanas" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json_body(&body)["items"][6], "Nanas");

    let (status, _) = post_json(&app, "/api/items", json!({ "name": "Nanas" })).await;
    assert_eq!(status, StatusCode::OK);

    post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-03", "quantities": { "Nanas": 1.5 } }),
    )
    .await;

    let (status, body) = get(&app, "/api/sales/export").await;
    assert_eq!(status, StatusCode::OK);
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "date,Apel,Pisang,Anggur,Stroberi,Mangga,Jeruk,Nanas");
    assert_eq!(lines[1], "2024-06-03,0,0,0,0,0,0,1.5");

    let (status, body) = get(&app, "/api/analysis/export").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 8);
}

#[tokio::test]
async fn eoq_horizon_is_capped() {
    let app = app();
    post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Apel": 10.0 } }),
    )
    .await;

    let (status, body) = get(&app, "/api/analysis/Apel/eoq?horizon_days=365").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["projection"].as_array().unwrap().len(), 365);

    let (status, body) = get(&app, "/api/analysis/Apel/eoq?horizon_days=4294967295").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_PARAMETER");
}

#[tokio::test]
async fn eoq_with_zero_ordering_cost_is_zero() {
    let app = app();
    post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Apel": 10.0 } }),
    )
    .await;

    let (status, body) = get(&app, "/api/analysis/Apel/eoq?ordering_cost=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["eoq"], 0.0);
}

#[tokio::test]
async fn malformed_requests_use_error_body() {
    let app = app();

    let req = Request::post("/api/sales")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err = json_body(&body);
    assert_eq!(err["success"], false);
    assert_eq!(err["code"], "INVALID_REQUEST");

    let (status, body) = post_json(
        &app,
        "/api/sales",
        json!({ "date": "2024-06-01", "quantities": { "Apel": "banyak" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_REQUEST");

    let (status, body) = post_json(&app, "/api/items", json!({ "nama": "Nanas" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_REQUEST");

    let (status, body) = get(&app, "/api/analysis/Apel/eoq?horizon_days=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["code"], "INVALID_REQUEST");

    let (_, body) = get(&app, "/api/sales").await;
    assert!(json_body(&body)["records"].as_array().unwrap().is_empty());
}
