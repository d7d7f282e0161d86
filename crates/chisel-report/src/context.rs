//! Wraps one failure for reporting, threading the insights flag.

use crate::chain::CauseChainFormatter;
use crate::config::{ClientMetaData, LoggingConfiguration};
use crate::details::{ExceptionStyle, FailureDetails};
use crate::failure::Failure;
use crate::resolution::fill_in_resolution;
use chisel_text::StyledTextOutput;

/// One failure plus the report-wide "insights integration already
/// active" flag, which nested contexts inherit unchanged.
pub struct FailureContext<'a> {
    failure: &'a dyn Failure,
    insights_active: bool,
}

impl<'a> FailureContext<'a> {
    pub fn new(failure: &'a dyn Failure, insights_active: bool) -> Self {
        Self {
            failure,
            insights_active,
        }
    }

    pub fn failure(&self) -> &'a dyn Failure {
        self.failure
    }

    pub fn has_multiple_failures(&self) -> bool {
        self.failure.as_aggregate().is_some()
    }

    /// Child contexts of an aggregate failure, in order; empty for a
    /// single failure.
    pub fn nested_contexts(&self) -> Vec<FailureContext<'a>> {
        match self.failure.as_aggregate() {
            Some(aggregate) => aggregate
                .failures()
                .iter()
                .map(|child| FailureContext::new(child.as_ref(), self.insights_active))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Assemble the five report sections for this failure: summary,
    /// resolution policy, then either the structured cause-chain walk
    /// or the failure's flat rendering, and finally the best-effort
    /// stack trace.
    pub fn failure_details(
        &self,
        granularity: &str,
        exception_style: ExceptionStyle,
        logging: &LoggingConfiguration,
        client: &ClientMetaData,
    ) -> FailureDetails<'a> {
        let mut details = FailureDetails::new(self.failure, exception_style);
        details
            .summary
            .text(&format!("{} failed with an exception.", granularity));

        fill_in_resolution(&mut details, logging, client, self.insights_active);

        if let Some(context_aware) = self.failure.as_context_aware() {
            let mut formatter = CauseChainFormatter::new(&mut details);
            context_aware.accept(&mut formatter);
        } else {
            details.append_details();
        }
        details.render_stack_trace();
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{GenericFailure, MultiCauseFailure};
    use chisel_text::PlainTextOutput;
    use std::sync::Arc;

    fn section_text(section: &chisel_text::BufferingStyledTextOutput) -> String {
        let mut out = PlainTextOutput::new();
        section.write_to(&mut out);
        out.into_string()
    }

    #[test]
    fn test_single_failure_has_no_nested_contexts() {
        let failure = GenericFailure::new("boom");
        let context = FailureContext::new(&failure, false);
        assert!(!context.has_multiple_failures());
        assert!(context.nested_contexts().is_empty());
    }

    #[test]
    fn test_nested_contexts_inherit_the_insights_flag() {
        let aggregate = MultiCauseFailure::build_completed(vec![
            Arc::new(GenericFailure::new("a")),
            Arc::new(GenericFailure::new("b")),
        ]);
        let context = FailureContext::new(&aggregate, true);
        let nested = context.nested_contexts();
        assert_eq!(nested.len(), 2);
        for child in &nested {
            assert!(child.insights_active);
        }
    }

    #[test]
    fn test_summary_uses_the_granularity_label() {
        let failure = GenericFailure::new("boom");
        let context = FailureContext::new(&failure, false);
        let details = context.failure_details(
            "Task",
            ExceptionStyle::None,
            &LoggingConfiguration::default(),
            &ClientMetaData::default(),
        );
        assert_eq!(section_text(&details.summary), "Task failed with an exception.");
        assert_eq!(section_text(&details.details), "boom");
    }
}
