use chesspath_core::{PlayerNode, SearchConfig, SearchOutcome, SearchStats, TargetIdentity};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: SearchStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub username: String,
    pub target: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub max_depth: usize,
    pub games_per_user: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_api_calls: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PlayerNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn create_json_output(
    username: &str,
    identity: &TargetIdentity,
    config: &SearchConfig,
    outcome: &SearchOutcome,
) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            username: username.to_string(),
            target: identity.name.clone(),
            options: JsonOptions {
                max_depth: config.max_depth,
                games_per_user: config.games_per_user,
                max_api_calls: config.max_api_calls,
            },
        },
        result: JsonResult {
            found: outcome.is_found(),
            degree: outcome.degree(),
            path: outcome.path().map(|path| path.nodes().to_vec()),
            error: outcome.reason().map(str::to_string),
        },
        stats: *outcome.stats(),
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
