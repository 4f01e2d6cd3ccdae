//! Data models and types for the CLI core.
//!
//! Contains domain types for:
//! - [`CommandTable`], [`CommandSpec`] - Command metadata supplied by the server docs
//! - [`RedisModule`], [`LoadedModule`] - Module requirements of module commands
//! - [`ExecutionResult`], [`Response`], [`ClusterNode`] - Remote execution results
//! - [`Segment`] - Rendered transcript output

mod command_spec;
mod execution;
mod module;
mod segment;

pub use command_spec::{CommandArgument, CommandSpec, CommandTable};
pub use execution::{ClusterNode, CommandExecutionStatus, ExecutionResult, Response};
pub use module::{LoadedModule, MODULE_COMMAND_PREFIXES, RedisModule};
pub use segment::{
    CliPrefix, Segment, SegmentContent, SegmentData, SegmentStyle, segments_to_text,
};
