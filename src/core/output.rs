//! Rendering of executed commands into transcript segments.
//!
//! Every method returns segments in display order. Nothing here fails: a
//! missing reply is shown as `(nil)`.

use crate::config::NIL_REPLY;
use crate::models::{
    ClusterNode, CliPrefix, CommandExecutionStatus, ExecutionResult, Response, Segment,
    SegmentContent,
};
use crate::utils::{CliTextFormatter, DbIndexLabel, IndexLabeler, ResponseFormatter};

/// Builds transcript segments from command results.
///
/// Reply formatting and database labels are delegated to `F` and `L`.
#[derive(Clone, Debug, Default)]
pub struct OutputRenderer<F = CliTextFormatter, L = DbIndexLabel> {
    formatter: F,
    labeler: L,
}

impl OutputRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: ResponseFormatter, L: IndexLabeler> OutputRenderer<F, L> {
    pub fn with(formatter: F, labeler: L) -> Self {
        Self { formatter, labeler }
    }

    /// A single reply styled by `status`.
    ///
    /// With `parse_markup` the formatted text is handed to the UI as markup.
    /// [`Response::Markup`] is always passed through as markup, unformatted.
    pub fn text_response(
        &self,
        response: &Response,
        command: &str,
        status: CommandExecutionStatus,
        prefix: CliPrefix,
        parse_markup: bool,
    ) -> Segment {
        let content = match response {
            Response::Markup(markup) => SegmentContent::Markup(markup.clone()),
            _ => {
                let text = self.formatter.format(response, command);
                if parse_markup {
                    SegmentContent::Markup(text)
                } else {
                    SegmentContent::Text(text)
                }
            }
        };
        Segment::response(status, prefix, content)
    }

    /// The reply followed by a line break, for stacking outputs.
    pub fn text_response_with_offset(
        &self,
        response: &Response,
        command: &str,
        status: CommandExecutionStatus,
    ) -> Vec<Segment> {
        vec![
            self.text_response(response, command, status, CliPrefix::Cli, false),
            Segment::line_break(),
        ]
    }

    /// The reply preceded by a cluster redirect notice.
    ///
    /// Without a redirect the notice is an empty text segment, so the segment
    /// layout is the same either way.
    pub fn text_response_with_redirect(
        &self,
        response: &Response,
        command: &str,
        status: CommandExecutionStatus,
        redirect: Option<&ClusterNode>,
    ) -> Vec<Segment> {
        let notice = redirect.map(ToString::to_string).unwrap_or_default();
        vec![
            Segment::text(notice),
            Segment::line_break(),
            self.text_response(response, command, status, CliPrefix::Cli, false),
            Segment::line_break(),
        ]
    }

    /// A command echo followed by its result, for grouped execution summaries.
    ///
    /// Successful replies get one segment per line; a failure is kept as one
    /// styled segment even when it spans several lines. A successful
    /// [`Response::Markup`] reply is not split either and stays markup.
    pub fn commands_group_result(
        &self,
        result: &ExecutionResult,
        db: Option<u32>,
    ) -> Vec<Segment> {
        let ExecutionResult {
            command,
            response,
            status,
        } = result;

        let nil;
        let response = if response.is_empty() {
            nil = Response::text(NIL_REPLY);
            &nil
        } else {
            response
        };

        let mut segments = vec![self.summary_command(command, db)];
        match status {
            CommandExecutionStatus::Success if matches!(response, Response::Markup(_)) => {
                segments.push(self.text_response(
                    response,
                    command,
                    *status,
                    CliPrefix::Cli,
                    true,
                ));
            }
            CommandExecutionStatus::Success => {
                let text = self.formatter.format(response, command);
                segments.extend(text.split('\n').map(Segment::text));
            }
            CommandExecutionStatus::Fail => {
                segments.push(self.text_response(
                    response,
                    command,
                    *status,
                    CliPrefix::Cli,
                    false,
                ));
            }
        }
        segments
    }

    /// Echo of a submitted command: the prompt and the command text as
    /// separate segments, between line breaks.
    pub fn command_output(&self, command: &str, db: u32) -> Vec<Segment> {
        vec![
            Segment::line_break(),
            Segment::text(self.prompt_text(db)),
            self.command_wrapper(command),
            Segment::line_break(),
        ]
    }

    /// Prompt shown before a command, e.g. `[db1] > `, or `> ` for db 0.
    pub fn prompt_text(&self, db: u32) -> String {
        format!("{} > ", self.labeler.label(db))
            .trim_start()
            .to_string()
    }

    pub fn command_wrapper(&self, command: &str) -> Segment {
        Segment::command(command)
    }

    /// One-line command echo heading a grouped result: `<label> > <command> \n`.
    pub fn summary_command(&self, command: &str, db: Option<u32>) -> Segment {
        let label = self.labeler.label(db.unwrap_or_default());
        Segment::summary(format!("{label} > {command} \n"))
    }
}
