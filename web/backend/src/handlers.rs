use crate::models::{
    HealthResponse, PathQuery, PathResponse, PathStatus, TargetsResponse,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use chesspath_core::{GameDataSource, SearchOutcome, SearchStats};
use std::sync::Arc;
use tracing::warn;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Chesspath API is running".to_string(),
    })
}

pub async fn list_targets<G: GameDataSource>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<TargetsResponse> {
    Json(TargetsResponse {
        default_target: state.targets.default_target().name.clone(),
        targets: state.targets.iter().cloned().collect(),
    })
}

pub async fn find_path<G: GameDataSource>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<PathQuery>,
) -> Json<PathResponse> {
    let username = params.username.trim().to_string();

    let Some(identity) = state.targets.resolve(params.target.as_deref()) else {
        let requested = params.target.unwrap_or_default();
        warn!(requested_target = %requested, "unknown target requested");
        return Json(PathResponse {
            status: PathStatus::Error,
            username,
            message: format!(
                "Unknown target '{}'. Available targets: {}",
                requested,
                state.targets.names().join(", ")
            ),
            target: None,
            path: None,
            degree: None,
            search_stats: SearchStats::default(),
        });
    };

    let outcome = state.finder.find_path(&username, identity).await;
    let degree = outcome.degree();

    let response = match outcome {
        SearchOutcome::Found { path, stats } => PathResponse {
            status: PathStatus::Found,
            message: if path.is_trivial() {
                format!("That's {}!", identity.name)
            } else {
                format!("Your {} Number: {}", identity.name, path.degree())
            },
            path: Some(path.into_nodes()),
            degree,
            search_stats: stats,
            username,
            target: Some(identity.name.clone()),
        },
        SearchOutcome::NotFound { reason, stats } => PathResponse {
            status: PathStatus::NotFound,
            message: reason,
            path: None,
            degree: None,
            search_stats: stats,
            username,
            target: Some(identity.name.clone()),
        },
        SearchOutcome::Failed { reason, stats } => PathResponse {
            status: PathStatus::Error,
            message: reason,
            path: None,
            degree: None,
            search_stats: stats,
            username,
            target: Some(identity.name.clone()),
        },
    };

    Json(response)
}
