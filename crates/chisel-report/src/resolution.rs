//! Builds the "Try:" section for one failure.

use chisel_text::{BufferingStyledTextOutput, Style, StyledTextOutput};

use crate::config::{options, ClientMetaData, LogLevel, LoggingConfiguration};
use crate::details::{ExceptionStyle, FailureDetails};

/// Accumulator handed to a failure while it suggests resolutions.
///
/// Suggestions write straight into the shared sink and cannot be
/// retracted once appended.
pub trait ResolutionContext {
    /// The client that launched the build. Pass-through only.
    fn client_metadata(&self) -> &ClientMetaData;

    /// Suppress later generic suggestions that only make sense when a
    /// build definition exists.
    fn do_not_suggest_resolutions_that_require_build_definition(&mut self);

    /// Append one suggestion. A blank line separates it from the
    /// previous one; each starts with a styled `"> "` marker.
    fn append_resolution(&mut self, producer: &mut dyn FnMut(&mut dyn StyledTextOutput));
}

pub(crate) struct ResolutionBuffer<'b, 'c> {
    resolution: &'b mut BufferingStyledTextOutput,
    client: &'c ClientMetaData,
    missing_build: bool,
}

impl<'b, 'c> ResolutionBuffer<'b, 'c> {
    pub(crate) fn new(
        resolution: &'b mut BufferingStyledTextOutput,
        client: &'c ClientMetaData,
    ) -> Self {
        Self {
            resolution,
            client,
            missing_build: false,
        }
    }

    pub(crate) fn missing_build(&self) -> bool {
        self.missing_build
    }
}

impl ResolutionContext for ResolutionBuffer<'_, '_> {
    fn client_metadata(&self) -> &ClientMetaData {
        self.client
    }

    fn do_not_suggest_resolutions_that_require_build_definition(&mut self) {
        self.missing_build = true;
    }

    fn append_resolution(&mut self, producer: &mut dyn FnMut(&mut dyn StyledTextOutput)) {
        if self.resolution.has_content() {
            self.resolution.new_line();
            self.resolution.new_line();
        }
        self.resolution.styled(Style::Info, "> ");
        producer(&mut *self.resolution);
    }
}

/// Fill the resolution section: the failure's own suggestions first,
/// then the environment-driven hints, in fixed order.
pub(crate) fn fill_in_resolution(
    details: &mut FailureDetails<'_>,
    logging: &LoggingConfiguration,
    client: &ClientMetaData,
    insights_active: bool,
) {
    let failure = details.failure();
    let exception_style = details.exception_style();
    let mut context = ResolutionBuffer::new(&mut details.resolution, client);

    if let Some(aware) = failure.as_resolution_aware() {
        aware.append_resolutions(&mut context);
    }

    if exception_style == ExceptionStyle::None {
        context.append_resolution(&mut |output: &mut dyn StyledTextOutput| {
            output.text("Run with ");
            output.styled(
                Style::UserInput,
                &format!("--{}", options::STACKTRACE_LONG_OPTION),
            );
            output.text(" option to get the stack trace.");
        });
    }

    if logging.log_level != LogLevel::Debug {
        context.append_resolution(&mut |output: &mut dyn StyledTextOutput| {
            output.text("Run with ");
            if logging.log_level != LogLevel::Info {
                output.styled(Style::UserInput, &format!("--{}", options::INFO_LONG_OPTION));
                output.text(" or ");
            }
            output.styled(
                Style::UserInput,
                &format!("--{}", options::DEBUG_LONG_OPTION),
            );
            output.text(" option to get more log output.");
        });
    }

    if !context.missing_build() && !insights_active {
        context.append_resolution(&mut |output: &mut dyn StyledTextOutput| {
            output.text("Run with ");
            output.styled(
                Style::UserInput,
                &format!("--{}", options::BUILD_SCAN_LONG_OPTION),
            );
            output.text(" to get full insights.");
        });
    }
}
