//! End-to-end tests for the full bendeskd stack.
//!
//! Each test spins up the complete application (temp-dir backing file, real
//! store, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bendesk_adapter_http_axum::router;
use bendesk_adapter_http_axum::state::AppState;
use bendesk_adapter_storage_file::{CsvPriceTableSource, JsonFileRecordStore};
use bendesk_app::services::estimate_service::EstimateService;
use bendesk_app::services::record_service::RecordService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const PRICE_TABLE_CSV: &str = "\
形状,重量範囲,〜835mm,〜1670mm,〜2505mm,〜3048mm,3048mm超
L曲げ,1,500,700,900,1100,1300
L曲げ,5,800,1000,1200,1400,1600
コの字曲げ,1,700,900,1100,1300,1500
";

/// Build a fully-wired router backed by files under a temp dir.
fn app(dir: &TempDir) -> axum::Router {
    let table_path = dir.path().join("bending_price_table.csv");
    std::fs::write(&table_path, PRICE_TABLE_CSV).expect("fixture CSV should write");

    let state = AppState::new(
        RecordService::new(JsonFileRecordStore::new(
            dir.path().join("data").join("records.json"),
        )),
        EstimateService::new(CsvPriceTableSource::new(table_path)),
    );
    router::build(state)
}

fn get_records() -> Request<Body> {
    Request::builder()
        .uri("/api/records")
        .body(Body::empty())
        .unwrap()
}

fn post_records(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/records")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_estimate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/estimate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = TempDir::new().unwrap();
    let resp = app(&dir)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Record store: GET
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_array_before_any_post() {
    let dir = TempDir::new().unwrap();
    let resp = app(&dir).oneshot(get_records()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_return_empty_array_when_backing_file_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("records.json"), "{not json at all").unwrap();

    let resp = app(&dir).oneshot(get_records()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

// ---------------------------------------------------------------------------
// Record store: POST + round-trips
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_roundtrip_collection_through_post_and_get() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let records = json!([
        {"形状": "L曲げ", "total": 750, "nested": {"punch": [1, 2, 3]}},
        {"memo": "角R注意", "approved": true},
    ]);

    let resp = app
        .clone()
        .oneshot(post_records(&records.to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"ok": true}));

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, records);
}

#[tokio::test]
async fn should_preserve_multibyte_characters_exactly() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let records = json!([{"customer": "株式会社山田製作所", "note": "曲げ見積り・至急"}]);

    app.clone()
        .oneshot(post_records(&records.to_string()))
        .await
        .unwrap();

    let resp = app.oneshot(get_records()).await.unwrap();
    let listed = body_json(resp).await;
    assert_eq!(listed[0]["customer"], "株式会社山田製作所");
    assert_eq!(listed[0]["note"], "曲げ見積り・至急");
}

#[tokio::test]
async fn should_be_stable_under_repeated_identical_posts() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let records = json!([{"id": 1}, {"id": 2}]);

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(post_records(&records.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, records);
}

#[tokio::test]
async fn should_overwrite_not_merge_on_subsequent_post() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    app.clone()
        .oneshot(post_records(r#"[{"id": 1}, {"id": 2}]"#))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_records(r#"[{"id": 3}]"#))
        .await
        .unwrap();

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, json!([{"id": 3}]));
}

#[tokio::test]
async fn should_accept_the_empty_array() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    app.clone()
        .oneshot(post_records(r#"[{"id": 1}]"#))
        .await
        .unwrap();
    let resp = app.clone().oneshot(post_records("[]")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

// ---------------------------------------------------------------------------
// Record store: invalid input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_non_array_bodies_and_leave_store_untouched() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let kept = json!([{"id": "keep-me"}]);

    app.clone()
        .oneshot(post_records(&kept.to_string()))
        .await
        .unwrap();

    for body in [r#"{"a": 1}"#, r#""string""#, "42", "{invalid"] {
        let resp = app.clone().oneshot(post_records(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Invalid JSON array"}),
            "body: {body}"
        );
    }

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, kept);
}

// ---------------------------------------------------------------------------
// Method handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_unsupported_methods_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let kept = json!([{"id": 1}]);

    app.clone()
        .oneshot(post_records(&kept.to_string()))
        .await
        .unwrap();

    for method in ["DELETE", "PUT", "PATCH"] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "method: {method}");
        assert_eq!(
            body_json(resp).await,
            json!({"error": "Method not allowed"}),
            "method: {method}"
        );
    }

    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, kept);
}

#[tokio::test]
async fn should_answer_preflight_with_empty_success() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/records")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // Preflight must not create the backing file.
    let resp = app.oneshot(get_records()).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_expose_permissive_cors_to_browser_clients() {
    let dir = TempDir::new().unwrap();

    let resp = app(&dir)
        .oneshot(
            Request::builder()
                .uri("/api/records")
                .header(header::ORIGIN, "https://sheet.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

// ---------------------------------------------------------------------------
// Persisted form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_pretty_printed_unescaped_json() {
    let dir = TempDir::new().unwrap();

    app(&dir)
        .oneshot(post_records(r#"[{"customer": "山田製作所"}]"#))
        .await
        .unwrap();

    let on_disk =
        std::fs::read_to_string(dir.path().join("data").join("records.json")).unwrap();
    assert!(on_disk.contains("山田製作所"));
    assert!(on_disk.contains('\n'));
}

// ---------------------------------------------------------------------------
// Estimate endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_compute_estimate_for_known_shape() {
    let dir = TempDir::new().unwrap();

    let resp = app(&dir)
        .oneshot(post_estimate(json!({
            "shape": "L曲げ",
            "weight_kg": 0.5,
            "length_mm": 500,
            "long_side_mm": 400,
            "lot": 10,
            "thickness_mm": 1.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let estimate = body_json(resp).await;
    assert_eq!(estimate["total_estimate"]["processing_cost_tax_excluded"], 500);
    assert_eq!(estimate["total_estimate"]["processing_cost_tax_included"], 550);
    assert_eq!(estimate["breakdown"]["bending_cost"]["base_price"], 500);
}

#[tokio::test]
async fn should_compute_estimate_with_options_and_holes() {
    let dir = TempDir::new().unwrap();

    let resp = app(&dir)
        .oneshot(post_estimate(json!({
            "shape": "L曲げ",
            "weight_kg": 3.0,
            "length_mm": 1200,
            "long_side_mm": 1200,
            "lot": 1,
            "thickness_mm": 6.0,
            "punch_count": 2,
            "pierce_count": 3,
            "nakagoshi": true,
            "reverse_bend": true,
            "meoshi_long": true,
            "fukabend": true,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let estimate = body_json(resp).await;
    // 1000 * 1.5 * 1.8 + 5500 = 8200 bending; 2*30 + 3*100 = 360 holes
    assert_eq!(estimate["breakdown"]["bending_cost"]["total"], 8200);
    assert_eq!(estimate["breakdown"]["hole_cost"]["total"], 360);
    assert_eq!(estimate["total_estimate"]["processing_cost_tax_excluded"], 8560);
    assert_eq!(estimate["total_estimate"]["processing_cost_tax_included"], 9416);
}

#[tokio::test]
async fn should_reject_estimate_for_unknown_shape() {
    let dir = TempDir::new().unwrap();

    let resp = app(&dir)
        .oneshot(post_estimate(json!({
            "shape": "ハット曲げ",
            "weight_kg": 0.5,
            "length_mm": 500,
            "long_side_mm": 400,
            "thickness_mm": 1.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "unknown shape: ハット曲げ");
}

#[tokio::test]
async fn should_fail_estimate_when_price_table_is_missing() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(
        RecordService::new(JsonFileRecordStore::new(
            dir.path().join("data").join("records.json"),
        )),
        EstimateService::new(CsvPriceTableSource::new(
            dir.path().join("no_such_table.csv"),
        )),
    );
    let app = router::build(state);

    let resp = app
        .oneshot(post_estimate(json!({
            "shape": "L曲げ",
            "weight_kg": 0.5,
            "length_mm": 500,
            "long_side_mm": 400,
            "thickness_mm": 1.0,
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Failed to load price table");
}
