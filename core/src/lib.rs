pub mod error;
pub mod finder;
pub mod gateway;
pub mod models;
pub mod search;
pub mod search_config;
pub mod string_normalization;
pub mod targets;

// Re-export commonly used items
pub use error::{ConfigError, GatewayError, SearchAbort};
pub use finder::{PathFinder, SearchOutcome};
pub use gateway::{GameDataSource, LichessClient};
pub use models::{GameRecord, Path, PlayerNode, Profile, Rating, SearchStats};
pub use search::{Branch, CancelFlag, PathSearch, Prune, SearchState, VisitedTrail};
pub use search_config::SearchConfig;
pub use targets::{TargetIdentity, TargetTable};
