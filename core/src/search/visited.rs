use crate::string_normalization::normalize_username;
use rustc_hash::FxHashSet;

/// Usernames already on the current root-to-node chain.
///
/// Each branch owns its own trail; extending it produces a new value so that
/// sibling branches never see each other's players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedTrail {
    usernames: FxHashSet<String>,
}

impl VisitedTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.usernames.contains(&normalize_username(username))
    }

    pub fn with_added(&self, username: &str) -> Self {
        let mut usernames = self.usernames.clone();
        usernames.insert(normalize_username(username));
        Self { usernames }
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}
