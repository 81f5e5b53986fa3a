#![allow(dead_code)]

use chesspath_core::string_normalization::normalize_username;
use chesspath_core::{GameDataSource, GameRecord, GatewayError, Profile, TargetIdentity};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;

/// In-memory stand-in for Lichess built from a list of games
#[derive(Default)]
pub struct FakeLichess {
    ratings: FxHashMap<String, Option<u32>>,
    games: FxHashMap<String, Vec<GameRecord>>,
    failing_profiles: FxHashSet<String>,
    failing_games: FxHashSet<String>,
    panicking_games: FxHashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeLichess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, username: &str, rating: Option<u32>) -> Self {
        self.ratings.insert(normalize_username(username), rating);
        self
    }

    /// Records a game between two registered players, in play order
    pub fn game(mut self, white: &str, black: &str) -> Self {
        self.ratings.entry(normalize_username(white)).or_insert(None);
        self.ratings.entry(normalize_username(black)).or_insert(None);
        self.push_game(white, GameRecord::new(white, black));
        if normalize_username(white) != normalize_username(black) {
            self.push_game(black, GameRecord::new(white, black));
        }
        self
    }

    /// Records a game against the computer for `username`
    pub fn game_against_ai(mut self, username: &str) -> Self {
        self.ratings.entry(normalize_username(username)).or_insert(None);
        self.push_game(
            username,
            GameRecord {
                id: Some("ai-game".to_string()),
                white: Some(username.to_string()),
                black: None,
            },
        );
        self
    }

    pub fn raw_game(mut self, username: &str, game: GameRecord) -> Self {
        self.push_game(username, game);
        self
    }

    pub fn missing_profile(mut self, username: &str) -> Self {
        self.ratings.remove(&normalize_username(username));
        self
    }

    pub fn failing_profile(mut self, username: &str) -> Self {
        self.failing_profiles.insert(normalize_username(username));
        self
    }

    pub fn failing_games(mut self, username: &str) -> Self {
        self.failing_games.insert(normalize_username(username));
        self
    }

    /// Makes the games lookup for `username` panic instead of answering
    pub fn panicking_games(mut self, username: &str) -> Self {
        self.panicking_games.insert(normalize_username(username));
        self
    }

    pub fn profile_calls(&self, username: &str) -> usize {
        self.count_calls(&format!("profile:{}", normalize_username(username)))
    }

    pub fn games_calls(&self, username: &str) -> usize {
        self.count_calls(&format!("games:{}", normalize_username(username)))
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn count_calls(&self, key: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == key)
            .count()
    }

    fn push_game(&mut self, username: &str, game: GameRecord) {
        self.games
            .entry(normalize_username(username))
            .or_default()
            .push(game);
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GameDataSource for FakeLichess {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, GatewayError> {
        let key = normalize_username(username);
        self.log(format!("profile:{}", key));

        if self.failing_profiles.contains(&key) {
            return Err(GatewayError::Transport(format!("connection reset for {}", username)));
        }

        match self.ratings.get(&key) {
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
        let key = normalize_username(username);
        self.log(format!("games:{}", key));

        if self.failing_games.contains(&key) {
            return Err(GatewayError::Transport("503 Service Unavailable".to_string()));
        }
        if self.panicking_games.contains(&key) {
            panic!("games export for {} blew up", username);
        }

        Ok(self
            .games
            .get(&key)
            .map(|games| games.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

pub fn target(accounts: &[&str]) -> TargetIdentity {
    TargetIdentity::new("Test Star", accounts.iter().copied(), "Test target")
}

/// Straight line of games `p0 - p1 - ... - p{len}` where the last player is `star`
pub fn chain_to_star(len: usize) -> FakeLichess {
    let names: Vec<String> = (0..len)
        .map(|i| format!("p{}", i))
        .chain(std::iter::once("star".to_string()))
        .collect();

    names
        .windows(2)
        .fold(FakeLichess::new(), |fake, pair| fake.game(&pair[0], &pair[1]))
}
