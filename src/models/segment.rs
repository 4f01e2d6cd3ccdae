//! Display segments making up the CLI transcript.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::CommandExecutionStatus;
use crate::config::COMMAND_WRAPPER_CLASS;

/// UI surface a response is rendered on; scopes the style class names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CliPrefix {
    #[default]
    Cli,
    QueryCard,
}

impl CliPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::QueryCard => "query-card",
        }
    }
}

impl fmt::Display for CliPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual style of a response segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentStyle {
    Success,
    Fail,
}

impl From<CommandExecutionStatus> for SegmentStyle {
    fn from(status: CommandExecutionStatus) -> Self {
        match status {
            CommandExecutionStatus::Success => Self::Success,
            CommandExecutionStatus::Fail => Self::Fail,
        }
    }
}

/// Body of a response segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SegmentContent {
    /// Shown verbatim.
    Text(String),
    /// Rich markup the UI interprets before display.
    Markup(String),
}

impl SegmentContent {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
        }
    }
}

/// A single display unit with a unique key
#[derive(Clone, Debug)]
pub struct Segment {
    /// Unique ID for keying list renders
    pub id: usize,
    pub data: SegmentData,
}

/// The actual content of a segment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SegmentData {
    /// Styled command reply
    Response {
        style: SegmentStyle,
        prefix: CliPrefix,
        content: SegmentContent,
    },
    /// Echoed command text next to the prompt
    Command(String),
    /// One-line echo heading a grouped result
    Summary(String),
    /// Unstyled text
    Text(String),
    /// Line break between stacked outputs
    LineBreak,
}

static SEGMENT_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Segment {
    fn new(data: SegmentData) -> Self {
        Self {
            id: SEGMENT_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn response(
        status: CommandExecutionStatus,
        prefix: CliPrefix,
        content: SegmentContent,
    ) -> Self {
        Self::new(SegmentData::Response {
            style: status.into(),
            prefix,
            content,
        })
    }

    pub fn command(s: impl Into<String>) -> Self {
        Self::new(SegmentData::Command(s.into()))
    }

    pub fn summary(s: impl Into<String>) -> Self {
        Self::new(SegmentData::Summary(s.into()))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(SegmentData::Text(s.into()))
    }

    pub fn line_break() -> Self {
        Self::new(SegmentData::LineBreak)
    }

    /// Success or fail styling, for response segments only.
    pub fn style(&self) -> Option<SegmentStyle> {
        match &self.data {
            SegmentData::Response { style, .. } => Some(*style),
            _ => None,
        }
    }

    /// CSS class the UI attaches to this segment, if any.
    ///
    /// Doubles as the test id of the rendered element.
    pub fn class_name(&self) -> Option<String> {
        match &self.data {
            SegmentData::Response { style, prefix, .. } => {
                let outcome = match style {
                    SegmentStyle::Success => "success",
                    SegmentStyle::Fail => "fail",
                };
                Some(format!("{prefix}-output-response-{outcome}"))
            }
            SegmentData::Command(_) | SegmentData::Summary(_) => {
                Some(COMMAND_WRAPPER_CLASS.to_string())
            }
            SegmentData::Text(_) | SegmentData::LineBreak => None,
        }
    }

    /// Visible text of the segment; a line break yields `"\n"`.
    pub fn as_text(&self) -> &str {
        match &self.data {
            SegmentData::Response { content, .. } => content.as_str(),
            SegmentData::Command(s) | SegmentData::Summary(s) | SegmentData::Text(s) => s,
            SegmentData::LineBreak => "\n",
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// Concatenate the visible text of a run of segments.
pub fn segments_to_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::as_text).collect()
}
