pub mod engine;
pub mod state;
pub mod visited;

// Re-export the public types
pub use engine::{Branch, BranchResult, PathSearch, Prune};
pub use state::{CancelFlag, SearchState};
pub use visited::VisitedTrail;
