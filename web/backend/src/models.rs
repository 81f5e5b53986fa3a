use chesspath_core::{PlayerNode, SearchStats, TargetIdentity};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct TargetsResponse {
    pub default_target: String,
    pub targets: Vec<TargetIdentity>,
}

#[derive(Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    NotFound,
    Error,
}

#[derive(Serialize, Deserialize)]
pub struct PathResponse {
    pub status: PathStatus,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub path: Option<Vec<PlayerNode>>,
    pub degree: Option<usize>,
    pub message: String,
    pub search_stats: SearchStats,
}
