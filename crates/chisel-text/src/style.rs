//! Output styles and their ANSI escape codes.

/// ANSI color codes - pastel palette shared by all chisel terminals
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const HEADER: &str = "\x1b[38;5;117m"; // Pastel blue
    pub const FAILURE: &str = "\x1b[38;5;210m"; // Pastel red
    pub const INFO: &str = "\x1b[38;5;228m"; // Pastel yellow
    pub const DIM: &str = "\x1b[38;5;250m"; // Light gray
}

/// Semantic style of a text span.
///
/// Sinks decide how (or whether) each style is displayed; buffered
/// spans carry the style through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Header,
    /// Text the user could type back in, e.g. a command-line flag.
    UserInput,
    Failure,
    Info,
}

impl Style {
    /// ANSI prefix for this style, empty for `Normal`.
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Style::Normal => "",
            Style::Header => colors::HEADER,
            Style::UserInput => colors::BOLD,
            Style::Failure => colors::FAILURE,
            Style::Info => colors::INFO,
        }
    }
}
