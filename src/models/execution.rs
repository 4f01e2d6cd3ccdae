//! Command execution results as handed back by the remote executor.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of executing a command on the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandExecutionStatus {
    #[default]
    Success,
    Fail,
}

impl CommandExecutionStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// A server reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Nil,
    Text(String),
    Integer(i64),
    Array(Vec<Response>),
    /// Pre-rendered rich markup, passed to the UI without text formatting.
    Markup(String),
}

impl Response {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// `true` for nil and empty text replies, which display as `(nil)`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Text(s) | Self::Markup(s) => s.is_empty(),
            Self::Integer(_) | Self::Array(_) => false,
        }
    }

    /// Convert a JSON reply into a [`Response`].
    ///
    /// Values without a reply counterpart (booleans, floats, objects) are kept
    /// as their JSON text.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::String(s) => Self::Text(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Text(n.to_string()),
            },
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
            other => Self::Text(other.to_string()),
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Response {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Response {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Result of one executed command.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult {
    pub command: String,
    pub response: Response,
    pub status: CommandExecutionStatus,
}

impl ExecutionResult {
    pub fn new(
        command: impl Into<String>,
        response: impl Into<Response>,
        status: CommandExecutionStatus,
    ) -> Self {
        Self {
            command: command.into(),
            response: response.into(),
            status,
        }
    }

    pub fn success(command: impl Into<String>, response: impl Into<Response>) -> Self {
        Self::new(command, response, CommandExecutionStatus::Success)
    }

    pub fn fail(command: impl Into<String>, response: impl Into<Response>) -> Self {
        Self::new(command, response, CommandExecutionStatus::Fail)
    }
}

/// Cluster node a command was redirected to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
    pub host: String,
    pub port: u16,
    pub slot: u16,
}

impl ClusterNode {
    pub fn new(host: impl Into<String>, port: u16, slot: u16) -> Self {
        Self {
            host: host.into(),
            port,
            slot,
        }
    }
}

impl fmt::Display for ClusterNode {
    /// Redirect notice in redis-cli form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-> Redirected to slot [{}] located at {}:{}",
            self.slot, self.host, self.port
        )
    }
}
