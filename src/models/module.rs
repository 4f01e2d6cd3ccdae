//! Server module types and the command-prefix requirement table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A server-side module a command may depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedisModule {
    Search,
    ReJson,
    TimeSeries,
    Graph,
    /// Bloom filter family (bloom, cuckoo, count-min sketch, t-digest, top-k).
    Bloom,
}

impl RedisModule {
    /// Canonical module name as reported by `MODULE LIST`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::ReJson => "ReJSON",
            Self::TimeSeries => "timeseries",
            Self::Graph => "graph",
            Self::Bloom => "bf",
        }
    }

    /// Every module name that satisfies this requirement.
    ///
    /// Matching is exact, so `"ReJSON"` does not match `"rejson"`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Search => &["search", "searchlight", "ft", "ftl"],
            Self::ReJson => &["ReJSON"],
            Self::TimeSeries => &["timeseries"],
            Self::Graph => &["graph"],
            Self::Bloom => &["bf"],
        }
    }

    /// Check whether a loaded module name satisfies this requirement.
    pub fn is_satisfied_by(self, name: &str) -> bool {
        self.aliases().contains(&name)
    }
}

impl fmt::Display for RedisModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Command prefixes mapped to the module that provides them.
///
/// Evaluated top to bottom; the first matching prefix wins.
pub const MODULE_COMMAND_PREFIXES: &[(&str, RedisModule)] = &[
    ("FT.", RedisModule::Search),
    ("JSON.", RedisModule::ReJson),
    ("TS.", RedisModule::TimeSeries),
    ("GRAPH.", RedisModule::Graph),
    ("BF.", RedisModule::Bloom),
    ("CF.", RedisModule::Bloom),
    ("CMS.", RedisModule::Bloom),
    ("TDIGEST.", RedisModule::Bloom),
    ("TOPK.", RedisModule::Bloom),
];

/// A module loaded on the connected server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedModule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_version: Option<String>,
}

impl LoadedModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            semantic_version: None,
        }
    }
}
