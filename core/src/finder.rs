use crate::error::SearchAbort;
use crate::gateway::GameDataSource;
use crate::models::{Path, SearchStats};
use crate::search::{CancelFlag, PathSearch};
use crate::search_config::SearchConfig;
use crate::targets::TargetIdentity;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found { path: Path, stats: SearchStats },
    NotFound { reason: String, stats: SearchStats },
    Failed { reason: String, stats: SearchStats },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn degree(&self) -> Option<usize> {
        self.path().map(Path::degree)
    }

    pub fn is_trivial(&self) -> bool {
        self.path().is_some_and(Path::is_trivial)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found { .. } => None,
            SearchOutcome::NotFound { reason, .. } | SearchOutcome::Failed { reason, .. } => {
                Some(reason)
            }
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. }
            | SearchOutcome::NotFound { stats, .. }
            | SearchOutcome::Failed { stats, .. } => stats,
        }
    }
}

/// Entry point of the search: owns the gateway and the search limits
pub struct PathFinder<G> {
    gateway: G,
    config: SearchConfig,
}

impl<G: GameDataSource> PathFinder<G> {
    pub fn new(gateway: G, config: SearchConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn find_path(&self, username: &str, identity: &TargetIdentity) -> SearchOutcome {
        self.find_path_cancellable(username, identity, CancelFlag::default())
            .await
    }

    pub async fn find_path_cancellable(
        &self,
        username: &str,
        identity: &TargetIdentity,
        cancel: CancelFlag,
    ) -> SearchOutcome {
        let start_time = Instant::now();
        let mut stats = SearchStats::default();

        let username = username.trim();
        if username.is_empty() {
            return SearchOutcome::Failed {
                reason: "Username must not be empty".to_string(),
                stats,
            };
        }

        info!(
            username,
            target_name = %identity.name,
            max_depth = self.config.max_depth,
            "starting path search"
        );

        let search = PathSearch::new(&self.gateway, &self.config, identity).with_cancel_flag(cancel);
        let result = AssertUnwindSafe(search.run(username, &mut stats))
            .catch_unwind()
            .await;

        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        let outcome = match result {
            Ok(Ok(Some(path))) => SearchOutcome::Found { path, stats },
            Ok(Ok(None)) => SearchOutcome::NotFound {
                reason: format!(
                    "No path found within {} degrees of separation to {}",
                    self.config.max_depth, identity.name
                ),
                stats,
            },
            Ok(Err(abort)) => SearchOutcome::Failed {
                reason: abort_reason(&abort),
                stats,
            },
            Err(_) => {
                warn!(username, "path search panicked");
                SearchOutcome::Failed {
                    reason: "Search failed unexpectedly".to_string(),
                    stats,
                }
            }
        };

        info!(
            username,
            found = outcome.is_found(),
            degree = ?outcome.degree(),
            api_calls = outcome.stats().api_calls,
            duration_ms = outcome.stats().duration_ms,
            "path search finished"
        );

        outcome
    }
}

fn abort_reason(abort: &SearchAbort) -> String {
    match abort {
        SearchAbort::Cancelled => "Search was cancelled".to_string(),
        SearchAbort::CallBudgetExhausted { limit } => {
            format!("Search gave up after {} API calls", limit)
        }
        SearchAbort::TimedOut { limit_secs } => {
            format!("Search gave up after {:.0} seconds", limit_secs)
        }
    }
}
