use super::GameDataSource;
use crate::error::GatewayError;
use crate::models::{GameRecord, Profile};
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://lichess.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("chesspath/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize, Clone)]
pub struct LichessUser {
    pub id: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub perfs: Option<LichessPerfs>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessPerfs {
    pub classical: Option<LichessPerf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessPerf {
    pub rating: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessGame {
    pub id: Option<String>,
    pub players: LichessPlayers,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessPlayers {
    pub white: LichessSeat,
    pub black: LichessSeat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessSeat {
    pub user: Option<LichessSeatUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LichessSeatUser {
    pub name: String,
}

impl From<LichessGame> for GameRecord {
    fn from(game: LichessGame) -> Self {
        GameRecord {
            id: game.id,
            white: game.players.white.user.map(|user| user.name),
            black: game.players.black.user.map(|user| user.name),
        }
    }
}

/// [`GameDataSource`] backed by the public Lichess API
#[derive(Clone)]
pub struct LichessClient {
    client: Client,
    base_url: String,
}

impl LichessClient {
    pub fn new() -> Result<Self, GatewayError> {
        Self::with_options(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/api/user/{}",
            self.base_url,
            urlencoding::encode(username.trim())
        )
    }

    fn games_url(&self, username: &str, limit: usize) -> String {
        format!(
            "{}/api/games/user/{}?max={}&perfType=classical",
            self.base_url,
            urlencoding::encode(username.trim()),
            limit
        )
    }
}

impl GameDataSource for LichessClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, GatewayError> {
        let url = self.profile_url(username);
        debug!(%url, "fetching profile");

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(GatewayError::NotFound(username.to_string())),
            status if !status.is_success() => {
                return Err(GatewayError::Transport(format!(
                    "profile request for {} failed with {}",
                    username, status
                )));
            }
            _ => {}
        }

        let body = response.text().await?;
        parse_profile(username, &body)
    }

    async fn fetch_recent_games(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<GameRecord>, GatewayError> {
        let url = self.games_url(username, limit);
        debug!(%url, "fetching games");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/x-ndjson")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "games request for {} failed with {}",
                username, status
            )));
        }

        let body = response.text().await?;
        let mut games = parse_games(&body)?;
        games.truncate(limit);
        Ok(games)
    }
}

pub fn parse_profile(requested: &str, body: &str) -> Result<Profile, GatewayError> {
    let user: LichessUser = serde_json::from_str(body)?;

    if user.disabled {
        return Err(GatewayError::NotFound(requested.to_string()));
    }

    Ok(Profile {
        username: user
            .username
            .or(user.id)
            .unwrap_or_else(|| requested.to_string()),
        classical_rating: user
            .perfs
            .and_then(|perfs| perfs.classical)
            .and_then(|classical| classical.rating)
            .filter(|rating| *rating > 0),
    })
}

/// Parses an NDJSON game export; blank lines are ignored
pub fn parse_games(body: &str) -> Result<Vec<GameRecord>, GatewayError> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str::<LichessGame>(line)
                .map(GameRecord::from)
                .map_err(|e| GatewayError::Parse(format!("game line {}: {}", index + 1, e)))
        })
        .collect()
}
