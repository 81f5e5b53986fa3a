pub mod lichess;

use crate::error::GatewayError;
use crate::models::{GameRecord, Profile};
use std::future::Future;

pub use lichess::LichessClient;

/// Source of player profiles and game histories.
///
/// Implementations hold no state between calls; every call is a fresh lookup.
pub trait GameDataSource: Send + Sync {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, GatewayError>> + Send;

    /// Most recent classical games of `username`, newest first, at most `limit`.
    /// A player without qualifying games yields an empty vector.
    fn fetch_recent_games(
        &self,
        username: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<GameRecord>, GatewayError>> + Send;
}
