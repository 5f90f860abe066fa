//! In-process API tests: build the app with `create_app()` and drive it with
//! `tower::ServiceExt::oneshot()`. No port is bound.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{AppState, create_app};

fn test_state() -> Arc<AppState> {
    let config = configuration::default_config().unwrap();
    let table = dataset::load().unwrap();
    Arc::new(AppState::new(table, config.dashboard, config.chart).unwrap())
}

async fn get(uri: &str) -> Response {
    create_app(test_state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(resp).await).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let resp = get("/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

#[tokio::test]
async fn tables_are_served_as_json() {
    let table = body_json(get("/api/table").await).await;
    assert_eq!(table["names"]["competitor"], "Luxe");
    assert_eq!(table["records"].as_array().unwrap().len(), 8);

    let derived = body_json(get("/api/derived").await).await;
    let rows = derived["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["month"], "2024-01");
}

#[tokio::test]
async fn metric_menus_follow_the_mode() {
    let solo = body_json(get("/api/metrics?mode=solo").await).await;
    let ids: Vec<&str> = solo["metrics"].as_array().unwrap().iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["occupancy", "adr", "revpar"]);

    let comparison = body_json(get("/api/metrics?mode=comparison").await).await;
    let metrics = comparison["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 7);
    assert_eq!(metrics[6]["label"], "RevPAR Gap with Luxe");
    assert_eq!(metrics[6]["toggleable"], false);
}

#[tokio::test]
async fn unknown_mode_is_a_bad_request() {
    let resp = get("/api/metrics?mode=duo").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].as_str().unwrap().contains("duo"));
}

#[tokio::test]
async fn view_defaults_to_both_competitors() {
    let view = body_json(get("/api/view?mode=comparison&metric=adr").await).await;
    assert_eq!(view["chart"]["series"].as_array().unwrap().len(), 3);
    assert_eq!(view["selection"]["competitors"]["competitor"], true);
    assert!(view["analysis"].as_str().unwrap().starts_with("**Analysis**"));
}

#[tokio::test]
async fn view_with_an_empty_competitor_list() {
    let view = body_json(get("/api/view?mode=comparison&metric=occupancy&competitors=").await).await;
    assert_eq!(view["chart"]["series"].as_array().unwrap().len(), 1);

    let gap = body_json(get("/api/view?mode=comparison&metric=revpar-gap&competitors=").await).await;
    assert_eq!(gap["chart"]["series"][0]["name"], "RevPAR Gap ($)");
    assert_eq!(gap["chart"]["reference_line"]["label"], "No Gap");
}

#[tokio::test]
async fn invalid_selections_are_bad_requests() {
    for uri in [
        "/api/view?mode=solo&metric=market-share",
        "/api/view?mode=comparison&metric=sharpe",
        "/api/view?mode=comparison&metric=adr&competitors=subject",
        "/api/chart.svg?mode=comparison&metric=adr&width=0",
    ] {
        let resp = get(uri).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn chart_is_served_as_svg() {
    let resp = get("/api/chart.svg?mode=comparison&metric=performance-indices").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let svg = body_text(resp).await;
    assert!(svg.contains("<svg"));
    assert!(svg.contains("RevPAR Index"));
}

#[tokio::test]
async fn dashboard_page_starts_in_solo_mode() {
    let resp = get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Detailed BNBME Performance Dashboard (2024)"));
    assert!(html.contains("<h2>Occupancy Trends (Solo)</h2>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<strong>Overall Performance</strong>"));
}

#[tokio::test]
async fn dashboard_form_submission_honours_unchecked_competitors() {
    let html = body_text(get("/?submitted=1&mode=comparison&metric=revpar&market=on").await).await;
    assert!(html.contains("<h2>RevPAR Trends (Comparison)</h2>"));
    assert!(html.contains("Anantara (Market)"));
    assert!(html.contains("name=\"market\" value=\"on\" checked"));
    assert!(!html.contains("name=\"competitor\" value=\"on\" checked"));
}

#[tokio::test]
async fn dashboard_falls_back_when_the_metric_leaves_the_menu() {
    let html = body_text(get("/?submitted=1&mode=solo&metric=market-share").await).await;
    assert!(html.contains("<h2>Occupancy Trends (Solo)</h2>"));
}

#[tokio::test]
async fn dashboard_accepts_menu_labels_only_for_the_real_competitor() {
    let html = body_text(get("/?submitted=1&mode=comparison&metric=RevPAR%20Gap%20with%20Luxe").await).await;
    assert!(html.contains("<h2>RevPAR Gap: BNBME vs Luxe (Comparison)</h2>"));

    let resp = get("/?submitted=1&mode=comparison&metric=RevPAR%20Gap%20with%20Anantara").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
