//! Core logic of the CLI.
//!
//! This module provides:
//! - [`classify`] and the individual eligibility checks
//! - [`command_name()`] resolution against a [`CommandTable`](crate::models::CommandTable)
//! - [`db_index_from_select_query`] for `SELECT` statements
//! - [`OutputRenderer`] and [`Transcript`] for displaying results
//! - [`CommandHistory`] persistence and [`HistoryCursor`] navigation

mod classifier;
mod command_name;
pub mod error;
mod history;
mod output;
mod select;
mod transcript;

pub use classifier::{
    Verdict, classify, is_blocking, is_unsupported, module_of, unsupported_module_of,
};
pub use command_name::{command_name, command_name_from_query, command_name_with};
pub use error::{SelectQueryError, StorageError};
pub use history::{CommandHistory, HistoryCursor, update_history_storage};
pub use output::OutputRenderer;
pub use select::db_index_from_select_query;
pub use transcript::Transcript;
