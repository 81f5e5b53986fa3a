use super::get_json;
use crate::fixtures::{create_test_app, create_test_app_with, single_target_table};
use axum::http::StatusCode;
use chesspath_core::{Rating, SearchConfig, TargetTable};
use chesspath_web::models::{PathResponse, PathStatus};

/// Default target is Magnus Carlsen, reached through one of his aliases
#[tokio::test]
async fn test_path_to_default_target() {
    let (status, body) =
        get_json::<PathResponse>(create_test_app(), "/api/path?username=rookie").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Found);
    assert_eq!(body.target.as_deref(), Some("Magnus Carlsen"));

    let path = body.path.unwrap();
    let names: Vec<&str> = path.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["rookie", "clubplayer", "DrNykterstein"]);
    assert_eq!(path[0].rating, Rating::Rated(1320));
    assert_eq!(body.degree, Some(2));
    assert_eq!(body.message, "Your Magnus Carlsen Number: 2");
    assert!(body.search_stats.api_calls > 0);
}

#[tokio::test]
async fn test_path_to_selected_target() {
    let (_, body) = get_json::<PathResponse>(
        create_test_app(),
        "/api/path?username=rookie&target=Hikaru%20Nakamura",
    )
    .await;

    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Found);
    assert_eq!(body.degree, Some(1));

    let path = body.path.unwrap();
    assert_eq!(path[1].username, "Hikaru");
    assert_eq!(path[1].rating, Rating::Unrated);
}

#[tokio::test]
async fn test_path_for_target_account_itself() {
    let (_, body) =
        get_json::<PathResponse>(create_test_app(), "/api/path?username=MAGNUSCARLSEN").await;

    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Found);
    assert_eq!(body.degree, Some(0));
    assert_eq!(body.path.unwrap().len(), 1);
    assert_eq!(body.message, "That's Magnus Carlsen!");
}

#[tokio::test]
async fn test_path_not_found() {
    let (status, body) =
        get_json::<PathResponse>(create_test_app(), "/api/path?username=hermit").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::NotFound);
    assert!(body.path.is_none());
    assert_eq!(
        body.message,
        "No path found within 5 degrees of separation to Magnus Carlsen"
    );
    assert_eq!(body.search_stats.api_calls, 2);
}

#[tokio::test]
async fn test_path_respects_configured_depth() {
    let app = create_test_app_with(SearchConfig::new(1, 100), TargetTable::builtin());

    let (_, body) = get_json::<PathResponse>(app, "/api/path?username=rookie").await;

    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::NotFound);
    assert_eq!(
        body.message,
        "No path found within 1 degrees of separation to Magnus Carlsen"
    );
}

#[tokio::test]
async fn test_path_unknown_target() {
    let (status, body) = get_json::<PathResponse>(
        create_test_app(),
        "/api/path?username=rookie&target=Bobby%20Fischer",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Error);
    assert!(body.message.starts_with("Unknown target 'Bobby Fischer'"));
    assert_eq!(body.search_stats.api_calls, 0);
}

#[tokio::test]
async fn test_path_blank_username() {
    let (_, body) =
        get_json::<PathResponse>(create_test_app(), "/api/path?username=%20%20").await;

    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Error);
    assert_eq!(body.message, "Username must not be empty");
}

#[tokio::test]
async fn test_path_missing_username_answers_error_status() {
    let (status, body) = get_json::<PathResponse>(create_test_app(), "/api/path").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Error);
    assert_eq!(body.message, "Username must not be empty");
    assert!(body.path.is_none());
    assert_eq!(body.search_stats.api_calls, 0);
}

#[tokio::test]
async fn test_path_call_budget() {
    let app = create_test_app_with(
        SearchConfig::default().with_max_api_calls(Some(2)),
        single_target_table("Far Away", &["nobody-reachable"]),
    );

    let (_, body) = get_json::<PathResponse>(app, "/api/path?username=rookie").await;

    let body = body.unwrap();
    assert_eq!(body.status, PathStatus::Error);
    assert_eq!(body.message, "Search gave up after 2 API calls");
    assert_eq!(body.search_stats.api_calls, 2);
}
