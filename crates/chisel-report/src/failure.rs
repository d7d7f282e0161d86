//! The failure model: what the build engine hands the reporter.
//!
//! A [`Failure`] is an opaque error value with a message, a type
//! identity, and an optional cause chain. On top of that, three
//! independent capabilities may be implemented: rendering a styled
//! message ([`StyledMessage`]), contributing structured context to the
//! cause-chain walk ([`ContextAware`]), and suggesting resolutions
//! ([`ResolutionAware`]). An [`AggregateFailure`] carries an ordered
//! list of independently reportable child failures.

use std::fmt::Debug;
use std::sync::Arc;

use chisel_text::{Style, StyledTextOutput};

use crate::error::FailureQueryError;
use crate::resolution::ResolutionContext;

/// An error value describing why the build did not complete.
///
/// Produced by the build engine, immutable once created, read-only to
/// the reporter. Capability accessors default to `None`; a failure
/// type opts in by returning `Some(self)`.
pub trait Failure: Debug {
    /// Type identity, rendered when no message is available.
    fn type_name(&self) -> &str;

    /// The failure message. `Ok(None)` means no message; `Err` means
    /// even reading the message failed, and the reporter substitutes a
    /// placeholder.
    fn message(&self) -> Result<Option<String>, FailureQueryError>;

    /// Direct cause, if any.
    fn cause(&self) -> Option<&dyn Failure> {
        None
    }

    /// Full stack trace, captured best-effort.
    fn stack_trace(&self) -> Result<Option<String>, FailureQueryError> {
        Ok(None)
    }

    fn as_styled(&self) -> Option<&dyn StyledMessage> {
        None
    }

    fn as_context_aware(&self) -> Option<&dyn ContextAware> {
        None
    }

    fn as_resolution_aware(&self) -> Option<&dyn ResolutionAware> {
        None
    }

    fn as_aggregate(&self) -> Option<&dyn AggregateFailure> {
        None
    }
}

/// Capability: the failure renders its own message with styled spans
/// instead of a plain string.
pub trait StyledMessage {
    fn render(&self, output: &mut dyn StyledTextOutput);
}

/// Capability: the failure decomposes into a location plus nested
/// causes, visited by the cause-chain walk.
pub trait ContextAware {
    /// Location text, kept verbatim in the report.
    fn location(&self) -> Option<&str> {
        None
    }

    /// Drive a visitor over this failure's structured context.
    fn accept<'a>(&'a self, visitor: &mut dyn FailureVisitor<'a>);
}

/// Capability: the failure contributes its own resolution suggestions.
pub trait ResolutionAware {
    fn append_resolutions(&self, context: &mut dyn ResolutionContext);
}

/// Capability: the failure is an ordered collection of independent
/// child failures, each reported in its own numbered section.
pub trait AggregateFailure {
    fn failures(&self) -> &[Arc<dyn Failure>];
}

/// Callbacks a [`ContextAware`] failure invokes while reporting its
/// structured context.
pub trait FailureVisitor<'a> {
    /// The failure's direct cause, rendered at depth 0.
    fn visit_cause(&mut self, cause: &'a dyn Failure);

    /// Location text. A later call replaces an earlier one.
    fn visit_location(&mut self, location: &str);

    /// One nested node in the cause chain.
    fn node(&mut self, node: &'a dyn Failure);

    fn start_children(&mut self);

    fn end_children(&mut self);
}

/// The message to display for a failure, with placeholder fallbacks.
pub fn display_message(failure: &dyn Failure) -> String {
    match failure.message() {
        Ok(Some(message)) if !message.is_empty() => message,
        Ok(_) => format!("{} (no error message)", failure.type_name()),
        Err(err) => format!(
            "Unable to get message for failure of type {} due to {}",
            short_type_name(failure.type_name()),
            err
        ),
    }
}

fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// Write a failure's styled rendering if it has one, else its message.
pub fn render_failure(failure: &dyn Failure, output: &mut dyn StyledTextOutput) {
    if let Some(styled) = failure.as_styled() {
        styled.render(output);
    } else {
        output.text(&display_message(failure));
    }
}

/// Walk a failure's nested causes, bracketing each nesting level (and
/// each aggregate fan-out) in `start_children` / `end_children`.
fn visit_causes<'a>(failure: &'a dyn Failure, visitor: &mut dyn FailureVisitor<'a>) {
    if let Some(aggregate) = failure.as_aggregate() {
        let children = aggregate.failures();
        if !children.is_empty() {
            visitor.start_children();
            for child in children {
                visit_node(child.as_ref(), visitor);
            }
            visitor.end_children();
        }
    } else if let Some(cause) = failure.cause() {
        visitor.start_children();
        visit_node(cause, visitor);
        visitor.end_children();
    }
}

fn visit_node<'a>(node: &'a dyn Failure, visitor: &mut dyn FailureVisitor<'a>) {
    visitor.node(node);
    if let Some(context) = node.as_context_aware() {
        if let Some(location) = context.location() {
            visitor.visit_location(location);
        }
    }
    visit_causes(node, visitor);
}

/// Plain failure: a message, an optional cause, an optional captured
/// stack trace.
#[derive(Debug, Default)]
pub struct GenericFailure {
    type_name: String,
    message: Option<String>,
    cause: Option<Arc<dyn Failure>>,
    stack_trace: Option<String>,
}

impl GenericFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            type_name: std::any::type_name::<Self>().to_string(),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A failure that carries no message at all.
    pub fn without_message() -> Self {
        Self {
            type_name: std::any::type_name::<Self>().to_string(),
            ..Self::default()
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_cause(mut self, cause: Arc<dyn Failure>) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }
}

impl Failure for GenericFailure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Result<Option<String>, FailureQueryError> {
        Ok(self.message.clone())
    }

    fn cause(&self) -> Option<&dyn Failure> {
        self.cause.as_deref()
    }

    fn stack_trace(&self) -> Result<Option<String>, FailureQueryError> {
        Ok(self.stack_trace.clone())
    }
}

/// Aggregate failure: its own top-level message plus an ordered list
/// of child failures.
#[derive(Debug)]
pub struct MultiCauseFailure {
    type_name: String,
    message: String,
    causes: Vec<Arc<dyn Failure>>,
}

impl MultiCauseFailure {
    pub fn new(message: impl Into<String>, causes: Vec<Arc<dyn Failure>>) -> Self {
        Self {
            type_name: std::any::type_name::<Self>().to_string(),
            message: message.into(),
            causes,
        }
    }

    /// Standard aggregate message for a finished build.
    pub fn build_completed(causes: Vec<Arc<dyn Failure>>) -> Self {
        let message = format!("Build completed with {} failures.", causes.len());
        Self::new(message, causes)
    }
}

impl Failure for MultiCauseFailure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Result<Option<String>, FailureQueryError> {
        Ok(Some(self.message.clone()))
    }

    fn as_aggregate(&self) -> Option<&dyn AggregateFailure> {
        Some(self)
    }
}

impl AggregateFailure for MultiCauseFailure {
    fn failures(&self) -> &[Arc<dyn Failure>] {
        &self.causes
    }
}

/// Context wrapper: attaches a location to a cause chain and walks it
/// for the visitor.
#[derive(Debug)]
pub struct ContextualFailure {
    type_name: String,
    location: Option<String>,
    cause: Arc<dyn Failure>,
}

impl ContextualFailure {
    pub fn new(cause: Arc<dyn Failure>) -> Self {
        Self {
            type_name: std::any::type_name::<Self>().to_string(),
            location: None,
            cause,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Failure for ContextualFailure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Result<Option<String>, FailureQueryError> {
        self.cause.message()
    }

    fn cause(&self) -> Option<&dyn Failure> {
        Some(self.cause.as_ref())
    }

    fn as_context_aware(&self) -> Option<&dyn ContextAware> {
        Some(self)
    }
}

impl ContextAware for ContextualFailure {
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn accept<'a>(&'a self, visitor: &mut dyn FailureVisitor<'a>) {
        visitor.visit_cause(self.cause.as_ref());
        if let Some(location) = &self.location {
            visitor.visit_location(location);
        }
        visit_causes(self.cause.as_ref(), visitor);
    }
}

/// Failure whose message is a sequence of styled spans.
#[derive(Debug)]
pub struct StyledFailure {
    type_name: String,
    spans: Vec<(Style, String)>,
}

impl StyledFailure {
    pub fn new(spans: Vec<(Style, String)>) -> Self {
        Self {
            type_name: std::any::type_name::<Self>().to_string(),
            spans,
        }
    }
}

impl Failure for StyledFailure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Result<Option<String>, FailureQueryError> {
        let plain: String = self.spans.iter().map(|(_, text)| text.as_str()).collect();
        Ok(Some(plain))
    }

    fn as_styled(&self) -> Option<&dyn StyledMessage> {
        Some(self)
    }
}

impl StyledMessage for StyledFailure {
    fn render(&self, output: &mut dyn StyledTextOutput) {
        for (style, text) in &self.spans {
            output.styled(*style, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chisel_text::PlainTextOutput;

    #[derive(Debug)]
    struct BrokenMessage;

    impl Failure for BrokenMessage {
        fn type_name(&self) -> &str {
            "chisel::tests::BrokenMessage"
        }

        fn message(&self) -> Result<Option<String>, FailureQueryError> {
            Err(FailureQueryError::Unavailable("backing store gone".to_string()))
        }
    }

    #[test]
    fn test_display_message_uses_the_message() {
        let failure = GenericFailure::new("disk full");
        assert_eq!(display_message(&failure), "disk full");
    }

    #[test]
    fn test_display_message_falls_back_on_type_name() {
        let failure = GenericFailure::without_message().with_type_name("build.TaskError");
        assert_eq!(display_message(&failure), "build.TaskError (no error message)");
    }

    #[test]
    fn test_display_message_treats_empty_as_missing() {
        let failure = GenericFailure::new("").with_type_name("build.TaskError");
        assert_eq!(display_message(&failure), "build.TaskError (no error message)");
    }

    #[test]
    fn test_display_message_survives_a_failing_message_lookup() {
        assert_eq!(
            display_message(&BrokenMessage),
            "Unable to get message for failure of type BrokenMessage due to backing store gone"
        );
    }

    #[test]
    fn test_render_failure_prefers_styled_rendering() {
        let failure = StyledFailure::new(vec![
            (Style::Normal, "Could not resolve ".to_string()),
            (Style::UserInput, "lib:core:1.2".to_string()),
        ]);
        let mut out = PlainTextOutput::new();
        render_failure(&failure, &mut out);
        assert_eq!(out.as_str(), "Could not resolve lib:core:1.2");
    }

    #[test]
    fn test_build_completed_message_counts_failures() {
        let aggregate = MultiCauseFailure::build_completed(vec![
            Arc::new(GenericFailure::new("a")),
            Arc::new(GenericFailure::new("b")),
        ]);
        assert_eq!(
            display_message(&aggregate),
            "Build completed with 2 failures."
        );
    }

    #[test]
    fn test_contextual_failure_walk_order() {
        #[derive(Debug, Default)]
        struct Recorder {
            events: Vec<String>,
        }

        impl<'a> FailureVisitor<'a> for Recorder {
            fn visit_cause(&mut self, cause: &'a dyn Failure) {
                self.events.push(format!("cause:{}", display_message(cause)));
            }

            fn visit_location(&mut self, location: &str) {
                self.events.push(format!("location:{}", location));
            }

            fn node(&mut self, node: &'a dyn Failure) {
                self.events.push(format!("node:{}", display_message(node)));
            }

            fn start_children(&mut self) {
                self.events.push("start".to_string());
            }

            fn end_children(&mut self) {
                self.events.push("end".to_string());
            }
        }

        let inner = Arc::new(GenericFailure::new("missing file"));
        let outer = Arc::new(GenericFailure::new("task broke").with_cause(inner));
        let contextual = ContextualFailure::new(outer).with_location("Build file 'build.chisel' line: 7");

        let mut recorder = Recorder::default();
        contextual.accept(&mut recorder);
        assert_eq!(
            recorder.events,
            vec![
                "cause:task broke",
                "location:Build file 'build.chisel' line: 7",
                "start",
                "node:missing file",
                "end",
            ]
        );
    }
}
