//! Command metadata table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One argument of a command as described by the command docs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandArgument {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub optional: bool,
    pub multiple: bool,
}

/// Metadata for a single command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    pub summary: Option<String>,
    pub since: Option<String>,
    pub group: Option<String>,
    pub complexity: Option<String>,
    pub arguments: Vec<CommandArgument>,
}

/// Command metadata keyed by uppercased `COMMAND` or `COMMAND SUBCOMMAND`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandTable(HashMap<String, CommandSpec>);

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from the JSON object served by the command docs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: CommandSpec) {
        self.0.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CommandSpec)> for CommandTable {
    fn from_iter<I: IntoIterator<Item = (K, CommandSpec)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
