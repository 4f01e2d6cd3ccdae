//! Canonical command name lookup.

use crate::config::{CliSettings, DEFAULT_LOOKUP_WINDOW};
use crate::models::CommandTable;

/// Resolve the command name of `query` using the default lookup window.
pub fn command_name(query: &str, commands: &CommandTable) -> Option<String> {
    command_name_from_query(query, commands, DEFAULT_LOOKUP_WINDOW)
}

/// Resolve the command name of `query` using the lookup window configured in
/// `settings`.
pub fn command_name_with(
    settings: &CliSettings,
    query: &str,
    commands: &CommandTable,
) -> Option<String> {
    command_name_from_query(query, commands, settings.lookup_window)
}

/// Resolve the command name of `query`.
///
/// Returns the first two tokens when, uppercased, they name a command in
/// `commands` (`CLIENT LIST`, `XINFO STREAM`), otherwise the first token.
/// Only the first `lookup_window` characters are inspected. Returns `None`
/// for blank input.
pub fn command_name_from_query(
    query: &str,
    commands: &CommandTable,
    lookup_window: usize,
) -> Option<String> {
    let window: String = query.chars().take(lookup_window).collect();
    let mut tokens = window.split_whitespace();

    let command = tokens.next()?;
    if let Some(first_arg) = tokens.next() {
        let candidate = format!("{command} {first_arg}");
        if commands.contains(&candidate.to_uppercase()) {
            return Some(candidate);
        }
    }
    Some(command.to_string())
}
