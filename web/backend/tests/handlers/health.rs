use super::get_json;
use crate::fixtures::create_test_app;
use axum::http::StatusCode;
use chesspath_web::models::HealthResponse;

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json::<HealthResponse>(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.status, "ok");
    assert_eq!(body.message, "Chesspath API is running");
}
