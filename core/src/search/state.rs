use super::visited::VisitedTrail;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-branch search state, copied into every recursive call
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub depth: usize,
    pub visited: VisitedTrail,
}

impl SearchState {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn mark_visited(&self, username: &str) -> Self {
        Self {
            depth: self.depth,
            visited: self.visited.with_added(username),
        }
    }

    pub fn child(&self) -> Self {
        Self {
            depth: self.depth + 1,
            visited: self.visited.clone(),
        }
    }
}

/// Shared flag that stops a running search at its next API call
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
