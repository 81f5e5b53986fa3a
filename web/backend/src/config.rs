use chesspath_core::{ConfigError, SearchConfig};
use chesspath_core::gateway::lichess::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Server settings, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub lichess_api_url: String,
    pub http_timeout: Duration,
    pub search: SearchConfig,
    pub targets_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            lichess_api_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            search: SearchConfig::default(),
            targets_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_depth = parse_var(&lookup, "MAX_SEARCH_DEPTH")?.unwrap_or(defaults.search.max_depth);
        let games_per_user =
            parse_var(&lookup, "GAMES_PER_USER")?.unwrap_or(defaults.search.games_per_user);
        let search = SearchConfig::new(max_depth, games_per_user)
            .with_max_api_calls(parse_var(&lookup, "MAX_API_CALLS")?)
            .with_time_limit(parse_var(&lookup, "SEARCH_TIME_LIMIT_SECS")?.map(Duration::from_secs));
        search.validate()?;

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            lichess_api_url: lookup("LICHESS_API_URL").unwrap_or(defaults.lichess_api_url),
            http_timeout: parse_var(&lookup, "HTTP_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            search,
            targets_path: lookup("TARGETS_PATH").map(PathBuf::from),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| {
                ConfigError::Invalid(format!("{} must be a positive integer, got '{}'", name, raw))
            }),
        _ => Ok(None),
    }
}
