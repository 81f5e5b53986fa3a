use super::get_json;
use crate::fixtures::{create_test_app, create_test_app_with, single_target_table};
use axum::http::StatusCode;
use chesspath_core::SearchConfig;
use chesspath_web::models::TargetsResponse;

#[tokio::test]
async fn test_list_builtin_targets() {
    let (status, body) = get_json::<TargetsResponse>(create_test_app(), "/api/targets").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.default_target, "Magnus Carlsen");
    let names: Vec<&str> = body.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Magnus Carlsen", "Hikaru Nakamura", "Alireza Firouzja"]);
    assert_eq!(
        body.targets[0].accounts,
        vec!["MagnusCarlsen", "DrNykterstein", "DrDrunkenstein"]
    );
}

#[tokio::test]
async fn test_list_configured_targets() {
    let app = create_test_app_with(
        SearchConfig::default(),
        single_target_table("Club Champion", &["clubplayer"]),
    );

    let (_, body) = get_json::<TargetsResponse>(app, "/api/targets").await;

    let body = body.unwrap();
    assert_eq!(body.default_target, "Club Champion");
    assert_eq!(body.targets.len(), 1);
}
