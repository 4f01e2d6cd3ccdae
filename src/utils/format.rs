//! Formatting of replies and prompt labels for display.
//!
//! Both formatters sit behind traits so the host application can swap in its
//! own styling; the defaults reproduce redis-cli output.

use crate::config::{EMPTY_ARRAY_REPLY, NIL_REPLY};
use crate::models::Response;

/// Turns a reply into display text.
pub trait ResponseFormatter {
    /// Format `response`, produced by `command`, as text.
    fn format(&self, response: &Response, command: &str) -> String;
}

/// Maps a database index to the label shown in front of the prompt.
pub trait IndexLabeler {
    fn label(&self, db: u32) -> String;
}

/// redis-cli style reply formatting.
///
/// Top-level text is shown verbatim, nested text is quoted, and arrays are
/// numbered with nested arrays indented under their index:
///
/// ```text
/// 1) "a"
/// 2) 1) (integer) 1
///    2) (nil)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CliTextFormatter;

impl ResponseFormatter for CliTextFormatter {
    fn format(&self, response: &Response, _command: &str) -> String {
        match response {
            Response::Text(s) | Response::Markup(s) => s.clone(),
            other => format_nested(other).join("\n"),
        }
    }
}

/// Format a reply that appears inside an array (or is a non-text top level).
fn format_nested(response: &Response) -> Vec<String> {
    match response {
        Response::Nil => vec![NIL_REPLY.to_string()],
        Response::Integer(n) => vec![format!("(integer) {}", n)],
        Response::Text(s) | Response::Markup(s) => vec![quote(s)],
        Response::Array(items) if items.is_empty() => vec![EMPTY_ARRAY_REPLY.to_string()],
        Response::Array(items) => {
            let width = items.len().to_string().len();
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let index = format!("{:>width$}) ", i + 1);
                let padding = " ".repeat(index.len());
                for (j, line) in format_nested(item).into_iter().enumerate() {
                    let lead = if j == 0 { &index } else { &padding };
                    lines.push(format!("{lead}{line}"));
                }
            }
            lines
        }
    }
}

/// Quote nested text the way redis-cli does, so it always fits on one line.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            c if c.is_control() && c.is_ascii() => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Default database label: empty for db 0, `[db<n>]` otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct DbIndexLabel;

impl IndexLabeler for DbIndexLabel {
    fn label(&self, db: u32) -> String {
        if db == 0 {
            String::new()
        } else {
            format!("[db{}]", db)
        }
    }
}
