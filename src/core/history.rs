//! Persisted command history.
//!
//! The history is a plain value: callers load it from a [`KeyValueStore`],
//! record into it and save it back. [`update_history_storage`] does all three
//! for a freshly submitted command.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{CLI_HISTORY_KEY, MAX_COMMAND_HISTORY};
use crate::core::error::StorageError;
use crate::utils::KeyValueStore;
use crate::utils::storage;

/// Previously issued commands, most recent first.
///
/// Holds at most [`MAX_COMMAND_HISTORY`] entries. Repeated commands are kept
/// as separate entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandHistory(Vec<String>);

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries ordered most recent first, dropping any
    /// beyond capacity.
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        Self(entries.into_iter().take(MAX_COMMAND_HISTORY).collect())
    }

    /// Load the persisted history. A missing or unreadable entry loads empty.
    pub fn load(store: &impl KeyValueStore) -> Self {
        storage::get::<Vec<String>>(store, CLI_HISTORY_KEY)
            .map(Self::from_entries)
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        storage::set(store, CLI_HISTORY_KEY, &self.0)
    }

    /// Put the trimmed `command` in front, evicting the oldest entry when full.
    ///
    /// Only an empty command is ignored; whitespace-only input is recorded as
    /// an empty entry. Returns whether the history changed.
    pub fn record(&mut self, command: &str) -> bool {
        if command.is_empty() {
            return false;
        }

        self.0.insert(0, command.trim().to_string());
        if self.0.len() > MAX_COMMAND_HISTORY {
            trace!(evicted = %self.0[MAX_COMMAND_HISTORY], "history full");
        }
        self.0.truncate(MAX_COMMAND_HISTORY);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Entry `index` steps back; 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Record a submitted command in the persisted history.
///
/// Loads the history from `store`, prepends `command`, saves it back and
/// passes the new history to `on_change`. An empty command leaves storage
/// untouched and returns `Ok(None)`.
pub fn update_history_storage<S, F>(
    store: &mut S,
    command: &str,
    on_change: F,
) -> Result<Option<CommandHistory>, StorageError>
where
    S: KeyValueStore,
    F: FnOnce(&CommandHistory),
{
    let mut history = CommandHistory::load(store);
    if !history.record(command) {
        return Ok(None);
    }

    history.save(store)?;
    debug!(entries = history.len(), "command history persisted");

    on_change(&history);
    Ok(Some(history))
}

/// Position while stepping through the history from the input line.
///
/// `None` means the live (unsubmitted) input is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    index: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Step to the next older entry, stopping at the oldest.
    pub fn older<'h>(&mut self, history: &'h CommandHistory) -> Option<&'h str> {
        if history.is_empty() {
            return None;
        }
        let last = history.len() - 1;
        let next = match self.index {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.index = Some(next);
        history.get(next)
    }

    /// Step to the next newer entry. Stepping past the most recent entry
    /// returns to the live input and yields `None`.
    pub fn newer<'h>(&mut self, history: &'h CommandHistory) -> Option<&'h str> {
        self.index = match self.index {
            Some(i) if i > 0 => Some((i - 1).min(history.len().saturating_sub(1))),
            _ => None,
        };
        let entry = self.index.and_then(|i| history.get(i));
        if entry.is_none() {
            self.index = None;
        }
        entry
    }

    /// Return to the live input, e.g. after a submit.
    pub fn reset(&mut self) {
        self.index = None;
    }
}
