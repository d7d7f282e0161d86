//! Styled terminal text primitives for chisel output.
//!
//! Everything that renders user-facing text goes through a
//! [`StyledTextOutput`]: an append-only sink of styled spans and line
//! breaks. Concrete sinks write ANSI escapes, plain text, or buffer
//! spans for later replay.

pub mod buffer;
pub mod output;
pub mod prefix;
pub mod style;

pub use buffer::BufferingStyledTextOutput;
pub use output::{AnsiTextOutput, PlainTextOutput, StyledTextOutput};
pub use prefix::LinePrefixingStyledTextOutput;
pub use style::Style;
