//! Command-line helpers for a Redis-compatible CLI.
//!
//! Classifies raw command lines before they are sent (unsupported, blocking,
//! or needing an unloaded module), resolves canonical command names, renders
//! execution results into display segments and keeps a bounded command
//! history in host-provided storage. Executing commands is left to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::CliSettings;
pub use crate::core::{
    CommandHistory, HistoryCursor, OutputRenderer, SelectQueryError, StorageError, Transcript,
    Verdict, classify, command_name, command_name_from_query, command_name_with,
    db_index_from_select_query, is_blocking, is_unsupported, module_of, unsupported_module_of,
    update_history_storage,
};
pub use crate::models::{
    ClusterNode, CommandExecutionStatus, CommandTable, ExecutionResult, LoadedModule,
    RedisModule, Response, Segment,
};
