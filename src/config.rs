//! CLI configuration.
//!
//! Centralizes the constants used throughout the crate, plus [`CliSettings`],
//! the per-connection command lists supplied by the server side.

use serde::{Deserialize, Serialize};

// =============================================================================
// History Configuration
// =============================================================================

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 20;

/// Storage key the command history is persisted under.
pub const CLI_HISTORY_KEY: &str = "cliInputHistory";

// =============================================================================
// Query Inspection
// =============================================================================

/// Number of leading characters scanned when resolving a command name.
pub const DEFAULT_LOOKUP_WINDOW: usize = 50;

/// Keyword of the database switch command.
pub const SELECT_COMMAND: &str = "select";

// =============================================================================
// Output Configuration
// =============================================================================

/// Placeholder shown for missing or empty replies.
pub const NIL_REPLY: &str = "(nil)";

/// Placeholder shown for an empty array reply.
pub const EMPTY_ARRAY_REPLY: &str = "(empty list or set)";

/// Maximum number of rendered segments kept in a transcript.
pub const MAX_TRANSCRIPT_SEGMENTS: usize = 1000;

/// Class name of the segment wrapping echoed command text.
pub const COMMAND_WRAPPER_CLASS: &str = "cli-command-wrapper";

// =============================================================================
// Default Command Lists
// =============================================================================

/// Commands the CLI refuses to run.
pub const DEFAULT_UNSUPPORTED_COMMANDS: &[&str] = &[
    "monitor",
    "subscribe",
    "psubscribe",
    "ssubscribe",
    "sync",
    "psync",
    "script debug",
    "hello 3",
];

/// Commands that may hold the connection until a timeout expires.
pub const DEFAULT_BLOCKING_COMMANDS: &[&str] = &[
    "blpop",
    "brpop",
    "blmove",
    "brpoplpush",
    "bzpopmin",
    "bzpopmax",
    "blmpop",
    "bzmpop",
    "xread",
    "xreadgroup",
];

/// Command lists and limits for one CLI session.
///
/// Every field is optional in the serialized form; missing fields fall back to
/// [`CliSettings::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliSettings {
    pub unsupported_commands: Vec<String>,
    pub blocking_commands: Vec<String>,
    pub lookup_window: usize,
}

impl CliSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            unsupported_commands: DEFAULT_UNSUPPORTED_COMMANDS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            blocking_commands: DEFAULT_BLOCKING_COMMANDS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            lookup_window: DEFAULT_LOOKUP_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CliSettings::default();
        assert!(settings.unsupported_commands.contains(&"monitor".to_string()));
        assert!(settings.blocking_commands.contains(&"blpop".to_string()));
        assert_eq!(settings.lookup_window, DEFAULT_LOOKUP_WINDOW);
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings = CliSettings::from_json(r#"{"blockingCommands": ["wait"]}"#).unwrap();
        assert_eq!(settings.blocking_commands, vec!["wait".to_string()]);
        assert_eq!(
            settings.unsupported_commands,
            CliSettings::default().unsupported_commands
        );
        assert_eq!(settings.lookup_window, DEFAULT_LOOKUP_WINDOW);
    }

    #[test]
    fn test_settings_from_invalid_json() {
        assert!(CliSettings::from_json("{not json").is_err());
    }
}
