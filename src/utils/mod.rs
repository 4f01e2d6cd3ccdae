//! Utility modules for formatting and persistence.
//!
//! Provides:
//! - [`ResponseFormatter`], [`CliTextFormatter`] - Reply to text formatting
//! - [`IndexLabeler`], [`DbIndexLabel`] - Database index prompt labels
//! - [`KeyValueStore`], [`MemoryStorage`] - Storage seam for persisted state

pub mod format;
pub mod storage;

pub use format::{CliTextFormatter, DbIndexLabel, IndexLabeler, ResponseFormatter};
pub use storage::{KeyValueStore, MemoryStorage};
