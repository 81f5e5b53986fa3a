use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_GAMES_PER_USER: usize = 100;

/// Configuration for the opponent-chain search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest opponent level explored; the starting player is depth 0
    pub max_depth: usize,
    /// Most recent classical games fetched per player
    pub games_per_user: usize,
    /// Abort the whole search after this many gateway calls
    pub max_api_calls: Option<usize>,
    /// Abort the whole search once this much wall-clock time has passed
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub fn new(max_depth: usize, games_per_user: usize) -> Self {
        Self {
            max_depth,
            games_per_user,
            ..Self::default()
        }
    }

    pub fn with_max_api_calls(mut self, max_api_calls: Option<usize>) -> Self {
        self.max_api_calls = max_api_calls;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be positive".to_string()));
        }
        if self.games_per_user == 0 {
            return Err(ConfigError::Invalid(
                "games_per_user must be positive".to_string(),
            ));
        }
        if self.max_api_calls == Some(0) {
            return Err(ConfigError::Invalid(
                "max_api_calls must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            games_per_user: DEFAULT_GAMES_PER_USER,
            max_api_calls: None,
            time_limit: None,
        }
    }
}
