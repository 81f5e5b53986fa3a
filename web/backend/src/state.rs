use crate::config::ServerConfig;
use chesspath_core::{GameDataSource, LichessClient, PathFinder, SearchConfig, TargetTable};
use tracing::info;

pub struct AppState<G> {
    pub finder: PathFinder<G>,
    pub targets: TargetTable,
}

impl<G: GameDataSource> AppState<G> {
    pub fn with_gateway(gateway: G, search: SearchConfig, targets: TargetTable) -> Self {
        Self {
            finder: PathFinder::new(gateway, search),
            targets,
        }
    }
}

impl AppState<LichessClient> {
    pub fn new(config: &ServerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let targets = match &config.targets_path {
            Some(path) => TargetTable::from_file(path)?,
            None => TargetTable::builtin(),
        };
        let client = LichessClient::with_options(&config.lichess_api_url, config.http_timeout)?;

        info!(
            targets = ?targets.names(),
            lichess = client.base_url(),
            max_depth = config.search.max_depth,
            games_per_user = config.search.games_per_user,
            "loaded configuration"
        );

        Ok(Self::with_gateway(client, config.search.clone(), targets))
    }
}
