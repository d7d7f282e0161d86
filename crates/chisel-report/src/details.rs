//! Buffered sections for one rendered failure.

use chisel_text::{BufferingStyledTextOutput, StyledTextOutput};

use crate::config::{LoggingConfiguration, ShowStacktrace};
use crate::failure::{render_failure, Failure};

/// Whether a full stack trace section is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionStyle {
    None,
    Full,
}

impl ExceptionStyle {
    /// `Full` unless the configured mode is the default
    /// internal-exceptions-only mode.
    pub fn from_configuration(config: &LoggingConfiguration) -> Self {
        if config.show_stacktrace != ShowStacktrace::InternalExceptions {
            ExceptionStyle::Full
        } else {
            ExceptionStyle::None
        }
    }
}

/// The five buffered sections of one failure's report, filled in
/// during assembly and written out only where they have content.
///
/// Created fresh per failure and discarded after rendering.
pub struct FailureDetails<'a> {
    failure: &'a dyn Failure,
    pub summary: BufferingStyledTextOutput,
    pub location: BufferingStyledTextOutput,
    pub details: BufferingStyledTextOutput,
    pub resolution: BufferingStyledTextOutput,
    pub stack_trace: BufferingStyledTextOutput,
    exception_style: ExceptionStyle,
}

impl<'a> FailureDetails<'a> {
    pub fn new(failure: &'a dyn Failure, exception_style: ExceptionStyle) -> Self {
        Self {
            failure,
            summary: BufferingStyledTextOutput::new(),
            location: BufferingStyledTextOutput::new(),
            details: BufferingStyledTextOutput::new(),
            resolution: BufferingStyledTextOutput::new(),
            stack_trace: BufferingStyledTextOutput::new(),
            exception_style,
        }
    }

    /// The failure the details section currently describes. The
    /// cause-chain walk narrows this to the reported cause.
    pub fn failure(&self) -> &'a dyn Failure {
        self.failure
    }

    pub(crate) fn set_failure(&mut self, failure: &'a dyn Failure) {
        self.failure = failure;
    }

    pub fn exception_style(&self) -> ExceptionStyle {
        self.exception_style
    }

    /// Append the current failure's rendering to the details section.
    pub fn append_details(&mut self) {
        let failure = self.failure;
        render_failure(failure, &mut self.details);
    }

    /// Capture the stack trace, best effort. A capture error leaves
    /// the section empty; it must never break the report.
    pub fn render_stack_trace(&mut self) {
        if self.exception_style != ExceptionStyle::Full {
            return;
        }
        match self.failure.stack_trace() {
            Ok(Some(trace)) => {
                self.stack_trace.text(&trace);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "discarded stack trace capture failure");
            }
        }
    }
}
