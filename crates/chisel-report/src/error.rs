//! Error types for failure reporting.

use thiserror::Error;

/// Errors raised while querying a failure value for display data.
///
/// These never escape the reporter: a failed message lookup becomes a
/// placeholder string and a failed stack-trace capture leaves that
/// section empty.
#[derive(Error, Debug)]
pub enum FailureQueryError {
    #[error("{0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
