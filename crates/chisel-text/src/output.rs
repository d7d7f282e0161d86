//! The styled text sink trait and its terminal-facing implementations.

use std::io::Write;

use crate::style::{colors, Style};

/// Append-only destination for styled text spans and line breaks.
///
/// Implementations never report errors to callers; a sink that can
/// fail (e.g. a pipe) discards write errors rather than interrupting
/// report rendering.
pub trait StyledTextOutput {
    /// Append one span in the given style.
    fn styled(&mut self, style: Style, text: &str);

    /// Append one span in `Style::Normal`.
    fn text(&mut self, text: &str) {
        self.styled(Style::Normal, text);
    }

    /// Append a line break.
    fn new_line(&mut self) {
        self.text("\n");
    }

    /// Append a span and a line break.
    fn println(&mut self, text: &str) {
        self.text(text);
        self.new_line();
    }
}

/// Sink that keeps plain text only, dropping style information.
///
/// Used for tests and for terminals without color support.
#[derive(Debug, Default)]
pub struct PlainTextOutput {
    buf: String,
}

impl PlainTextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl StyledTextOutput for PlainTextOutput {
    fn styled(&mut self, _style: Style, text: &str) {
        self.buf.push_str(text);
    }
}

/// Sink that writes ANSI-styled spans to an underlying writer.
pub struct AnsiTextOutput<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> AnsiTextOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Disable or enable escape sequences without changing the writer.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl AnsiTextOutput<std::io::Stdout> {
    /// Standard output sink; colors only when stdout is a TTY.
    pub fn stdout() -> Self {
        AnsiTextOutput::new(std::io::stdout()).with_color(atty::is(atty::Stream::Stdout))
    }
}

impl<W: Write> StyledTextOutput for AnsiTextOutput<W> {
    fn styled(&mut self, style: Style, text: &str) {
        if self.color && style != Style::Normal {
            let _ = write!(self.out, "{}{}{}", style.ansi_code(), text, colors::RESET);
        } else {
            let _ = write!(self.out, "{}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_drops_styles() {
        let mut out = PlainTextOutput::new();
        out.styled(Style::Failure, "boom");
        out.text(" and ");
        out.println("bust");
        assert_eq!(out.as_str(), "boom and bust\n");
    }

    #[test]
    fn test_ansi_output_wraps_styled_spans() {
        let mut out = AnsiTextOutput::new(Vec::new());
        out.styled(Style::Info, "> ");
        out.text("hint");
        let written = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            written,
            format!("{}> {}hint", colors::INFO, colors::RESET)
        );
    }

    #[test]
    fn test_ansi_output_without_color_is_plain() {
        let mut out = AnsiTextOutput::new(Vec::new()).with_color(false);
        out.styled(Style::Failure, "FAILURE: ");
        out.println("Build failed with an exception.");
        let written = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(written, "FAILURE: Build failed with an exception.\n");
    }
}
