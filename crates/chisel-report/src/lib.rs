//! Renders a build failure into a human-readable terminal report.
//!
//! The reporter consumes an opaque [`Failure`] produced by the build
//! engine and writes a structured report to a styled text sink: a
//! `FAILURE:` summary, then Where / What went wrong / Try / Exception
//! sections (each only when it has content), then a help footer.
//! Aggregate failures get one numbered block per child failure.
//!
//! Rendering is synchronous, single-pass, and side-effect-limited: it
//! never retries anything, never mutates build state, and converts its
//! own internal errors into placeholder text or empty sections instead
//! of propagating them.

pub mod chain;
pub mod config;
pub mod context;
pub mod details;
pub mod error;
pub mod failure;
pub mod reporter;
pub mod resolution;

pub use chain::CauseChainFormatter;
pub use config::{options, ClientMetaData, LogLevel, LoggingConfiguration, ShowStacktrace};
pub use context::FailureContext;
pub use details::{ExceptionStyle, FailureDetails};
pub use error::FailureQueryError;
pub use failure::{
    display_message, render_failure, AggregateFailure, ContextAware, ContextualFailure, Failure,
    FailureVisitor, GenericFailure, MultiCauseFailure, ResolutionAware, StyledFailure,
    StyledMessage,
};
pub use reporter::{BuildOutcome, FailureReporter};
pub use resolution::ResolutionContext;
