//! Formats a failure's cause chain into the details section.

use chisel_text::{LinePrefixingStyledTextOutput, Style, StyledTextOutput};

use crate::details::FailureDetails;
use crate::failure::{render_failure, Failure, FailureVisitor};

const INDENT: &str = "   ";

/// Visitor that turns the reported cause chain into an indented tree:
/// depth 0 is written bare, deeper nodes get a `"> "` marker preceded
/// by one 3-space indent per extra level. Continuation lines of a
/// node line up under its marker.
///
/// Depth only changes inside `start_children` / `end_children`
/// brackets. The walk is a plain recursive descent; a self-referential
/// cause chain is a bug in the failure, not something handled here.
pub struct CauseChainFormatter<'d, 'a> {
    details: &'d mut FailureDetails<'a>,
    depth: usize,
}

impl<'d, 'a> CauseChainFormatter<'d, 'a> {
    pub fn new(details: &'d mut FailureDetails<'a>) -> Self {
        Self { details, depth: 0 }
    }
}

impl<'a> FailureVisitor<'a> for CauseChainFormatter<'_, 'a> {
    fn visit_cause(&mut self, cause: &'a dyn Failure) {
        self.details.set_failure(cause);
        self.details.append_details();
    }

    fn visit_location(&mut self, location: &str) {
        // Last writer wins when several causes report a location.
        self.details.location.clear();
        self.details.location.text(location);
    }

    fn node(&mut self, node: &'a dyn Failure) {
        let sink = &mut self.details.details;
        if self.depth == 0 {
            render_failure(node, sink);
            return;
        }
        sink.new_line();
        let mut prefix = INDENT.repeat(self.depth - 1);
        sink.text(&prefix);
        prefix.push_str("  ");
        sink.styled(Style::Info, "> ");
        let mut prefixed = LinePrefixingStyledTextOutput::new(sink, prefix);
        render_failure(node, &mut prefixed);
    }

    fn start_children(&mut self) {
        self.depth += 1;
    }

    fn end_children(&mut self) {
        self.depth -= 1;
    }
}
