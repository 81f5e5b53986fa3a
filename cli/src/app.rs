use std::error::Error;

use chesspath_core::{LichessClient, PathFinder, TargetIdentity, TargetTable};

use crate::args::Args;

pub struct ChessPathApp {
    pub finder: PathFinder<LichessClient>,
    pub targets: TargetTable,
}

impl ChessPathApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let config = args.search_config();
        config.validate()?;

        let targets = load_targets(args)?;
        let client = LichessClient::with_options(
            &args.lichess_url,
            chesspath_core::gateway::lichess::DEFAULT_TIMEOUT,
        )?;

        Ok(Self {
            finder: PathFinder::new(client, config),
            targets,
        })
    }

    pub fn resolve_target(&self, name: Option<&str>) -> Result<&TargetIdentity, String> {
        self.targets.resolve(name).ok_or_else(|| {
            format!(
                "Unknown target '{}'. Available targets: {}",
                name.unwrap_or_default(),
                self.targets.names().join(", ")
            )
        })
    }
}

pub fn load_targets(args: &Args) -> Result<TargetTable, Box<dyn Error>> {
    match &args.targets {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Targets file does not exist: {:?}", path).into());
            }
            Ok(TargetTable::from_file(path)?)
        }
        None => Ok(TargetTable::builtin()),
    }
}
