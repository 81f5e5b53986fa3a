use thiserror::Error;

/// Failures reported by a [`GameDataSource`](crate::gateway::GameDataSource).
///
/// Inside a search these never abort exploration; they prune the branch that
/// hit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("player not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Parse(error.to_string())
    }
}

/// Conditions that end the entire search, not just one branch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchAbort {
    #[error("search cancelled")]
    Cancelled,

    #[error("search stopped after {limit} API calls")]
    CallBudgetExhausted { limit: usize },

    #[error("search stopped after {limit_secs:.1} seconds")]
    TimedOut { limit_secs: f64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("could not read target table: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse target table: {0}")]
    Parse(#[from] serde_json::Error),
}
