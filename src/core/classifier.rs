//! Command eligibility checks.
//!
//! Decides whether a command line may be sent to the server:
//! - commands the CLI does not support at all
//! - blocking commands that hold the connection
//! - module commands whose module is not loaded
//!
//! Every check is a pure function of its inputs and never fails; "no match"
//! is reported as `None`.

use tracing::debug;

use crate::config::CliSettings;
use crate::models::{LoadedModule, MODULE_COMMAND_PREFIXES, RedisModule};

/// Verdict on a command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing prevents execution.
    Allowed,
    /// Matches an entry of the unsupported list.
    Unsupported(String),
    /// Matches an entry of the blocking list.
    Blocking(String),
    /// Requires a module the server has not loaded.
    MissingModule(RedisModule),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// First unsupported command the line starts with, compared case-insensitively.
pub fn is_unsupported<'a, S: AsRef<str>>(unsupported: &'a [S], line: &str) -> Option<&'a str> {
    let line = line.trim().to_lowercase();
    unsupported
        .iter()
        .map(|command| command.as_ref())
        .find(|command| line.starts_with(&command.to_lowercase()))
}

/// First blocking command the line starts with.
///
/// Only the line is lowercased; list entries are compared as given, so an
/// uppercase entry never matches.
pub fn is_blocking<'a, S: AsRef<str>>(blocking: &'a [S], line: &str) -> Option<&'a str> {
    let line = line.trim().to_lowercase();
    blocking
        .iter()
        .map(|command| command.as_ref())
        .find(|command| line.starts_with(command))
}

/// Module providing the command, by its prefix.
pub fn module_of(line: &str) -> Option<RedisModule> {
    let command = line.to_uppercase();
    MODULE_COMMAND_PREFIXES
        .iter()
        .find(|(prefix, _)| command.starts_with(prefix))
        .map(|&(_, module)| module)
}

/// Module the command needs but the server has not loaded.
pub fn unsupported_module_of(loaded: &[LoadedModule], line: &str) -> Option<RedisModule> {
    let module = module_of(line.trim())?;
    let is_loaded = loaded
        .iter()
        .any(|LoadedModule { name, .. }| module.is_satisfied_by(name));

    (!is_loaded).then_some(module)
}

/// Run every check in order: unsupported, blocking, missing module.
pub fn classify(settings: &CliSettings, loaded: &[LoadedModule], line: &str) -> Verdict {
    let verdict = if let Some(command) = is_unsupported(&settings.unsupported_commands, line) {
        Verdict::Unsupported(command.to_string())
    } else if let Some(command) = is_blocking(&settings.blocking_commands, line) {
        Verdict::Blocking(command.to_string())
    } else if let Some(module) = unsupported_module_of(loaded, line) {
        Verdict::MissingModule(module)
    } else {
        Verdict::Allowed
    };

    if !verdict.is_allowed() {
        debug!(?verdict, "command line rejected");
    }
    verdict
}
