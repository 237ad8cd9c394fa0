use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration_test::TestSetup;

async fn call(
    test_setup: &TestSetup,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (u16, serde_json::Value) {
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body.map(|body| Body::from(body.to_string())).unwrap_or_default())
        .unwrap();
    let response = rest::generate_router(test_setup.rest_state.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_sheet_upload_and_summary() {
    let test_setup = TestSetup::new().await;

    let (status, _) = call(
        &test_setup,
        "POST",
        "/employee",
        Some(r#"{"id": "1001", "name": "Siti Rahma", "level_tier": "supervisor"}"#),
    )
    .await;
    assert_eq!(status, 201);

    let (status, period) = call(
        &test_setup,
        "POST",
        "/cut-off",
        Some(
            r#"{"label": "Januari 2024", "start_date": "2024-01-01", "end_date": "2024-01-31", "is_active": true}"#,
        ),
    )
    .await;
    assert_eq!(status, 201);
    let period_id = period["id"].as_str().unwrap().to_string();

    let (status, result) = call(
        &test_setup,
        "POST",
        "/overtime/import",
        Some(
            r#"[
                {"NIK": 1001, "TANGGAL": 45306, "JENIS LEMBUR": "Hari Kerja", "JAM LEMBUR": "4 Jam"},
                {"NIK": "1001", "TANGGAL": "2024-01-16T00:00:00.000Z", "JENIS LEMBUR": "Hari Libur", "JAM LEMBUR": "6 Jam"},
                {"TANGGAL": "2024-01-17"}
            ]"#,
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(result["imported"].as_array().unwrap().len(), 2);
    assert_eq!(result["imported"][0]["date"], "2024-01-15");
    assert_eq!(result["skipped"], 1);

    let (status, summary) = call(
        &test_setup,
        "GET",
        &format!("/report/summary?cut_off_id={}", period_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(summary["record_count"], 2);
    // supervisor workday 4 hours: 30000 + 2 * 15000, holiday 6 hours: 100000
    assert_eq!(summary["total_incentive"], 160_000);
    assert_eq!(summary["recap"][0]["employee_id"], "1001");
}

#[tokio::test]
async fn test_unknown_employee_is_not_found() {
    let test_setup = TestSetup::new().await;

    let (status, _) = call(&test_setup, "GET", "/report/employee/4242", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_duplicate_employee_conflicts() {
    let test_setup = TestSetup::new().await;
    let body = r#"{"id": "1001", "name": "Siti Rahma"}"#;

    let (status, employee) = call(&test_setup, "POST", "/employee", Some(body)).await;
    assert_eq!(status, 201);
    assert_eq!(employee["level_tier"], "staff");
    let (status, _) = call(&test_setup, "POST", "/employee", Some(body)).await;
    assert_eq!(status, 409);
}
