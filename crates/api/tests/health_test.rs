mod test_utils;

use axum::http::StatusCode;
use gigbook_db::mock::MockBookingStore;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_check() {
    let response = test_utils::server(MockBookingStore::new()).get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version_names_the_api_crate() {
    let response = test_utils::server(MockBookingStore::new()).get("/version").await;

    let body: Value = response.json();
    assert_eq!(body["name"], "gigbook-api");
}
