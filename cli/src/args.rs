use chesspath_core::SearchConfig;
use chesspath_core::gateway::lichess::DEFAULT_BASE_URL;
use chesspath_core::search_config::{DEFAULT_GAMES_PER_USER, DEFAULT_MAX_DEPTH};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "chesspath")]
#[command(about = "Find a chain of Lichess opponents leading to a famous chess player")]
pub struct Args {
    /// Lichess username to start from
    #[arg(required_unless_present = "list_targets")]
    pub username: Option<String>,

    /// Target player to connect to (defaults to the first configured target)
    #[arg(short, long, value_name = "NAME")]
    pub target: Option<String>,

    /// Maximum degrees of separation to explore
    #[arg(short = 'd', long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Most recent classical games fetched per player
    #[arg(short = 'g', long, value_name = "COUNT", default_value_t = DEFAULT_GAMES_PER_USER)]
    pub games_per_user: usize,

    /// Give up after this many Lichess API calls
    #[arg(long, value_name = "COUNT")]
    pub max_calls: Option<usize>,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// JSON file with custom targets
    #[arg(long, value_name = "FILE")]
    pub targets: Option<PathBuf>,

    /// Lichess API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub lichess_url: String,

    /// List available targets and exit
    #[arg(long)]
    pub list_targets: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide Lichess profile URLs from output (URLs shown by default)
    #[arg(short = 'u', long)]
    pub hide_urls: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.max_depth, self.games_per_user)
            .with_max_api_calls(self.max_calls)
            .with_time_limit(self.time_limit.map(Duration::from_secs))
    }
}
