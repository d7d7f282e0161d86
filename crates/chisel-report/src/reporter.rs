//! Renders the final failure report after the build stops.

use std::sync::Arc;

use chisel_text::{BufferingStyledTextOutput, Style, StyledTextOutput};

use crate::config::{options, ClientMetaData, LoggingConfiguration};
use crate::context::FailureContext;
use crate::details::{ExceptionStyle, FailureDetails};
use crate::failure::{display_message, Failure};

const RULE: &str = "==============================================================================";

/// What the build engine hands over once execution stops.
pub struct BuildOutcome {
    failure: Option<Arc<dyn Failure>>,
    insights_active: bool,
}

impl BuildOutcome {
    pub fn success() -> Self {
        Self {
            failure: None,
            insights_active: false,
        }
    }

    pub fn failed(failure: Arc<dyn Failure>) -> Self {
        Self {
            failure: Some(failure),
            insights_active: false,
        }
    }

    /// Record that the insights integration was already active for
    /// this build, which silences the build-scan hint.
    pub fn with_insights_active(mut self, insights_active: bool) -> Self {
        self.insights_active = insights_active;
        self
    }

    pub fn failure(&self) -> Option<&dyn Failure> {
        self.failure.as_deref()
    }
}

/// Renders a build failure into a structured report: summary line,
/// optional Where / What went wrong / Try / Exception sections, and a
/// help footer. Invoked at most once per build outcome; a successful
/// outcome renders nothing.
pub struct FailureReporter {
    logging: LoggingConfiguration,
    client: ClientMetaData,
}

impl FailureReporter {
    pub fn new(logging: LoggingConfiguration, client: ClientMetaData) -> Self {
        Self { logging, client }
    }

    /// Report the outcome of a finished build. No-op on success.
    pub fn build_finished(&self, outcome: &BuildOutcome, output: &mut dyn StyledTextOutput) {
        let Some(failure) = outcome.failure() else {
            return;
        };
        self.render(FailureContext::new(failure, outcome.insights_active), output);
    }

    /// Report a bare failure, with no insights integration assumed.
    pub fn report(&self, failure: &dyn Failure, output: &mut dyn StyledTextOutput) {
        self.render(FailureContext::new(failure, false), output);
    }

    fn render(&self, context: FailureContext<'_>, output: &mut dyn StyledTextOutput) {
        let exception_style = ExceptionStyle::from_configuration(&self.logging);
        tracing::debug!(
            aggregate = context.has_multiple_failures(),
            ?exception_style,
            "rendering build failure report"
        );
        if context.has_multiple_failures() {
            self.render_multiple_failures(&context, exception_style, output);
        } else {
            self.render_single_failure(&context, exception_style, output);
        }
        write_general_tips(output);
    }

    fn render_single_failure(
        &self,
        context: &FailureContext<'_>,
        exception_style: ExceptionStyle,
        output: &mut dyn StyledTextOutput,
    ) {
        let details = self.assemble("Build", context, exception_style);

        output.new_line();
        write_summary(&details.summary, "FAILURE: ", output);
        output.new_line();

        write_failure_details(output, &details);
    }

    fn render_multiple_failures(
        &self,
        context: &FailureContext<'_>,
        exception_style: ExceptionStyle,
        output: &mut dyn StyledTextOutput,
    ) {
        output.new_line();
        output.styled(
            Style::Failure,
            &format!("FAILURE: {}", display_message(context.failure())),
        );
        output.new_line();

        for (index, nested) in context.nested_contexts().iter().enumerate() {
            let details = self.assemble("Task", nested, exception_style);

            output.new_line();
            write_summary(&details.summary, &format!("{}: ", index + 1), output);
            output.new_line();
            output.text("-----------");

            write_failure_details(output, &details);

            output.println(RULE);
        }
    }

    fn assemble<'a>(
        &self,
        granularity: &str,
        context: &FailureContext<'a>,
        exception_style: ExceptionStyle,
    ) -> FailureDetails<'a> {
        context.failure_details(granularity, exception_style, &self.logging, &self.client)
    }
}

/// Replays spans into another sink, restyling `Normal` spans. Used to
/// render buffered summaries in failure red.
struct RestylingOutput<'o> {
    inner: &'o mut dyn StyledTextOutput,
    default_style: Style,
}

impl StyledTextOutput for RestylingOutput<'_> {
    fn styled(&mut self, style: Style, text: &str) {
        let style = if style == Style::Normal {
            self.default_style
        } else {
            style
        };
        self.inner.styled(style, text);
    }
}

fn write_summary(
    summary: &BufferingStyledTextOutput,
    heading: &str,
    output: &mut dyn StyledTextOutput,
) {
    let mut failure_output = RestylingOutput {
        inner: output,
        default_style: Style::Failure,
    };
    failure_output.text(heading);
    summary.write_to(&mut failure_output);
}

fn write_failure_details(output: &mut dyn StyledTextOutput, details: &FailureDetails<'_>) {
    write_section(output, "* Where:", &details.location);
    write_section(output, "* What went wrong:", &details.details);
    write_section(output, "* Try:", &details.resolution);
    write_section(output, "* Exception is:", &details.stack_trace);
}

fn write_section(
    output: &mut dyn StyledTextOutput,
    heading: &str,
    section: &BufferingStyledTextOutput,
) {
    if !section.has_content() {
        return;
    }
    output.new_line();
    output.println(heading);
    section.write_to(output);
    output.new_line();
}

fn write_general_tips(output: &mut dyn StyledTextOutput) {
    output.new_line();
    output.text("* Get more help at ");
    output.styled(Style::UserInput, options::HELP_URL);
    output.new_line();
}
