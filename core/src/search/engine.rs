use super::state::{CancelFlag, SearchState};
use crate::error::{GatewayError, SearchAbort};
use crate::gateway::GameDataSource;
use crate::models::{Path, PlayerNode, SearchStats};
use crate::search_config::SearchConfig;
use crate::targets::TargetIdentity;
use futures::future::{BoxFuture, FutureExt};
use std::time::Instant;
use tracing::debug;

/// Why a branch ended without reaching a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prune {
    DepthLimit,
    Cycle,
    Gateway(GatewayError),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Found(Vec<PlayerNode>),
    Pruned(Prune),
}

pub type BranchResult = Result<Branch, SearchAbort>;

/// Depth-first walk over the opponent graph, discovering edges on demand.
///
/// Games are explored in the order the gateway returns them and the first
/// branch that reaches the target wins, so the result is not necessarily the
/// shortest chain.
pub struct PathSearch<'a, G> {
    gateway: &'a G,
    config: &'a SearchConfig,
    target: &'a TargetIdentity,
    cancel: CancelFlag,
    started: Instant,
}

impl<'a, G: GameDataSource> PathSearch<'a, G> {
    pub fn new(gateway: &'a G, config: &'a SearchConfig, target: &'a TargetIdentity) -> Self {
        Self {
            gateway,
            config,
            target,
            cancel: CancelFlag::default(),
            started: Instant::now(),
        }
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub async fn run(
        &self,
        username: &str,
        stats: &mut SearchStats,
    ) -> Result<Option<Path>, SearchAbort> {
        let branch = self
            .search(username.trim().to_string(), SearchState::root(), stats)
            .await?;

        Ok(match branch {
            Branch::Found(nodes) => Path::from_nodes(nodes),
            Branch::Pruned(_) => None,
        })
    }

    pub fn search<'s>(
        &'s self,
        username: String,
        state: SearchState,
        stats: &'s mut SearchStats,
    ) -> BoxFuture<'s, BranchResult> {
        async move {
            if state.depth > self.config.max_depth {
                return Ok(prune(stats, &username, state.depth, Prune::DepthLimit));
            }
            if state.visited.contains(&username) {
                return Ok(prune(stats, &username, state.depth, Prune::Cycle));
            }

            let state = state.mark_visited(&username);
            stats.max_depth_reached = stats.max_depth_reached.max(state.depth);

            self.before_api_call(stats)?;
            let profile = match self.gateway.fetch_profile(&username).await {
                Ok(profile) => profile,
                Err(error) => {
                    return Ok(prune(stats, &username, state.depth, Prune::Gateway(error)));
                }
            };
            stats.players_explored += 1;

            let node = PlayerNode::new(username.clone(), profile.rating());
            if self.target.is_target(&username) {
                debug!(username = %username, depth = state.depth, "reached target account");
                return Ok(Branch::Found(vec![node]));
            }

            self.before_api_call(stats)?;
            let games = match self
                .gateway
                .fetch_recent_games(&username, self.config.games_per_user)
                .await
            {
                Ok(games) => games,
                Err(error) => {
                    return Ok(prune(stats, &username, state.depth, Prune::Gateway(error)));
                }
            };

            for game in &games {
                let Some(opponent) = game.opponent_of(&username) else {
                    debug!(username = %username, game = ?game.id, "skipping game without a resolvable opponent");
                    continue;
                };

                let branch = self
                    .search(opponent.to_string(), state.child(), &mut *stats)
                    .await?;

                if let Branch::Found(mut chain) = branch {
                    chain.insert(0, node);
                    return Ok(Branch::Found(chain));
                }
            }

            Ok(prune(stats, &username, state.depth, Prune::Exhausted))
        }
        .boxed()
    }

    fn before_api_call(&self, stats: &mut SearchStats) -> Result<(), SearchAbort> {
        if self.cancel.is_cancelled() {
            return Err(SearchAbort::Cancelled);
        }

        if let Some(limit) = self.config.max_api_calls {
            if stats.api_calls >= limit {
                return Err(SearchAbort::CallBudgetExhausted { limit });
            }
        }

        if let Some(limit) = self.config.time_limit {
            if self.started.elapsed() >= limit {
                return Err(SearchAbort::TimedOut {
                    limit_secs: limit.as_secs_f64(),
                });
            }
        }

        stats.api_calls += 1;
        Ok(())
    }
}

fn prune(stats: &mut SearchStats, username: &str, depth: usize, reason: Prune) -> Branch {
    debug!(username = %username, depth, reason = ?reason, "pruned branch");
    stats.pruned_branches += 1;
    Branch::Pruned(reason)
}
