use crate::error::ConfigError;
use crate::string_normalization::{normalize_username, same_username};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// A celebrity player and every Lichess account known to belong to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetIdentity {
    pub name: String,
    pub accounts: Vec<String>,
    pub description: String,
}

impl TargetIdentity {
    pub fn new(
        name: impl Into<String>,
        accounts: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            accounts: accounts.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    pub fn is_target(&self, username: &str) -> bool {
        let normalized = normalize_username(username);
        self.accounts
            .iter()
            .any(|account| normalize_username(account) == normalized)
    }
}

#[derive(Deserialize)]
struct TargetEntry {
    accounts: Vec<String>,
    #[serde(default)]
    description: String,
}

/// Ordered set of selectable targets; the first entry is the default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetTable {
    identities: Vec<TargetIdentity>,
}

impl TargetTable {
    pub fn new(identities: Vec<TargetIdentity>) -> Result<Self, ConfigError> {
        if identities.is_empty() {
            return Err(ConfigError::Invalid(
                "target table must contain at least one identity".to_string(),
            ));
        }

        for identity in &identities {
            if identity.accounts.iter().all(|a| normalize_username(a).is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "target '{}' has no accounts",
                    identity.name
                )));
            }
        }

        Ok(Self { identities })
    }

    pub fn builtin() -> Self {
        Self {
            identities: vec![
                TargetIdentity::new(
                    "Magnus Carlsen",
                    ["MagnusCarlsen", "DrNykterstein", "DrDrunkenstein"],
                    "Discover your connection to Magnus Carlsen through Lichess games",
                ),
                TargetIdentity::new(
                    "Hikaru Nakamura",
                    ["Hikaru"],
                    "Find your connection to Hikaru Nakamura through Lichess games",
                ),
                TargetIdentity::new(
                    "Alireza Firouzja",
                    ["alireza2003"],
                    "Explore your connection to Alireza Firouzja through Lichess games",
                ),
            ],
        }
    }

    /// Parses `{"<name>": {"accounts": [...], "description": "..."}, ...}`,
    /// keeping the order of the file.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let identities = (&mut deserializer).deserialize_map(TableVisitor)?;
        deserializer.end()?;
        Self::new(identities)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, name: &str) -> Option<&TargetIdentity> {
        self.identities
            .iter()
            .find(|identity| same_username(&identity.name, name))
    }

    pub fn default_target(&self) -> &TargetIdentity {
        &self.identities[0]
    }

    /// Named target, or the default one when no name is given
    pub fn resolve(&self, name: Option<&str>) -> Option<&TargetIdentity> {
        match name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => self.get(name),
            None => Some(self.default_target()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetIdentity> {
        self.identities.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.identities.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl Default for TargetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = Vec<TargetIdentity>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of target names to their accounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut identities = Vec::new();
        while let Some((name, entry)) = map.next_entry::<String, TargetEntry>()? {
            identities.push(TargetIdentity {
                name,
                accounts: entry.accounts,
                description: entry.description,
            });
        }
        Ok(identities)
    }
}
