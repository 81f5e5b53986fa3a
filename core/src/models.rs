use crate::string_normalization::normalize_username;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Classical rating of a player, or the explicit "Unrated" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    Rated(u32),
    #[default]
    Unrated,
}

impl Rating {
    pub fn value(&self) -> Option<u32> {
        match self {
            Rating::Rated(value) => Some(*value),
            Rating::Unrated => None,
        }
    }
}

impl From<Option<u32>> for Rating {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Rating::Unrated, Rating::Rated)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(value) => write!(f, "{}", value),
            Rating::Unrated => f.write_str("Unrated"),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Rated(value) => serializer.serialize_u32(*value),
            Rating::Unrated => serializer.serialize_str("Unrated"),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RatingRepr {
            Rated(u32),
            Marker(String),
        }

        Ok(match RatingRepr::deserialize(deserializer)? {
            RatingRepr::Rated(value) => Rating::Rated(value),
            RatingRepr::Marker(_) => Rating::Unrated,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNode {
    pub username: String,
    pub rating: Rating,
}

impl PlayerNode {
    pub fn new(username: impl Into<String>, rating: Rating) -> Self {
        Self {
            username: username.into(),
            rating,
        }
    }
}

/// Chain of players from the searched username to a target account.
///
/// Never empty: a single node means the searched username already is a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<PlayerNode>);

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes = Vec::<PlayerNode>::deserialize(deserializer)?;
        Path::from_nodes(nodes)
            .ok_or_else(|| serde::de::Error::custom("a path needs at least one player"))
    }
}

impl Path {
    pub fn from_nodes(nodes: Vec<PlayerNode>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self(nodes))
        }
    }

    pub fn nodes(&self) -> &[PlayerNode] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<PlayerNode> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of connections between the start and the target
    pub fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_trivial(&self) -> bool {
        self.0.len() == 1
    }

    pub fn start(&self) -> &PlayerNode {
        &self.0[0]
    }

    pub fn target(&self) -> &PlayerNode {
        &self.0[self.0.len() - 1]
    }

    pub fn usernames(&self) -> Vec<&str> {
        self.0.iter().map(|node| node.username.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub username: String,
    pub classical_rating: Option<u32>,
}

impl Profile {
    pub fn rating(&self) -> Rating {
        Rating::from(self.classical_rating)
    }
}

/// A completed game, reduced to the two seats.
///
/// A seat is `None` when it was not held by a registered account (AI or
/// anonymous player).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameRecord {
    pub id: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl GameRecord {
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            id: None,
            white: Some(white.into()),
            black: Some(black.into()),
        }
    }

    /// Username of the other participant, if it can be determined
    pub fn opponent_of(&self, username: &str) -> Option<&str> {
        let player = normalize_username(username);
        let is_player = |seat: &Option<String>| {
            seat.as_deref()
                .is_some_and(|name| normalize_username(name) == player)
        };

        if is_player(&self.white) {
            self.black.as_deref()
        } else if is_player(&self.black) {
            self.white.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub players_explored: usize,
    pub api_calls: usize,
    pub pruned_branches: usize,
    pub max_depth_reached: usize,
    pub duration_ms: u64,
}
