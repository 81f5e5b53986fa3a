use axum::Router;
use chesspath_core::string_normalization::normalize_username;
use chesspath_core::{
    GameDataSource, GameRecord, GatewayError, Profile, SearchConfig, TargetIdentity, TargetTable,
};
use chesspath_web::router;
use chesspath_web::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Small fixed opponent graph:
///
/// rookie - clubplayer - DrNykterstein
/// rookie - Hikaru
/// hermit has a profile but no games
pub struct TestGateway {
    ratings: HashMap<String, Option<u32>>,
    games: HashMap<String, Vec<GameRecord>>,
}

impl TestGateway {
    pub fn new() -> Self {
        let ratings = [
            ("rookie", Some(1320)),
            ("clubplayer", Some(1890)),
            ("drnykterstein", Some(2900)),
            ("hikaru", None),
            ("magnuscarlsen", Some(2863)),
            ("hermit", Some(1500)),
        ]
        .into_iter()
        .map(|(name, rating)| (name.to_string(), rating))
        .collect();

        let mut games: HashMap<String, Vec<GameRecord>> = HashMap::new();
        for (white, black) in [
            ("rookie", "clubplayer"),
            ("clubplayer", "DrNykterstein"),
            ("Hikaru", "rookie"),
        ] {
            games
                .entry(normalize_username(white))
                .or_default()
                .push(GameRecord::new(white, black));
            games
                .entry(normalize_username(black))
                .or_default()
                .push(GameRecord::new(white, black));
        }

        Self { ratings, games }
    }
}

impl GameDataSource for TestGateway {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, GatewayError> {
        match self.ratings.get(&normalize_username(username)) {
            Some(rating) => Ok(Profile {
                username: username.to_string(),
                classical_rating: *rating,
            }),
            None => Err(GatewayError::NotFound(username.to_string())),
        }
    }

    async fn fetch_recent_games(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<GameRecord>, GatewayError> {
        Ok(self
            .games
            .get(&normalize_username(username))
            .map(|games| games.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

pub fn create_test_app() -> Router {
    create_test_app_with(SearchConfig::default(), TargetTable::builtin())
}

pub fn create_test_app_with(search: SearchConfig, targets: TargetTable) -> Router {
    let state = AppState::with_gateway(TestGateway::new(), search, targets);
    router(Arc::new(state))
}

pub fn single_target_table(name: &str, accounts: &[&str]) -> TargetTable {
    TargetTable::new(vec![TargetIdentity::new(
        name,
        accounts.iter().copied(),
        "Test target",
    )])
    .unwrap()
}
