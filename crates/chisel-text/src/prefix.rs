//! A pass-through sink that indents continuation lines.

use crate::output::StyledTextOutput;
use crate::style::Style;

/// Forwards spans to another sink, inserting a fixed prefix after each
/// line break. The first line is written as-is, so multi-line content
/// lines up under a marker the caller already wrote.
pub struct LinePrefixingStyledTextOutput<'a> {
    inner: &'a mut dyn StyledTextOutput,
    prefix: String,
    needs_prefix: bool,
}

impl<'a> LinePrefixingStyledTextOutput<'a> {
    pub fn new(inner: &'a mut dyn StyledTextOutput, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            needs_prefix: false,
        }
    }
}

impl StyledTextOutput for LinePrefixingStyledTextOutput<'_> {
    fn styled(&mut self, style: Style, text: &str) {
        let mut rest = text;
        while let Some(pos) = rest.find('\n') {
            let (line, tail) = rest.split_at(pos);
            if !line.is_empty() {
                if self.needs_prefix {
                    self.inner.text(&self.prefix);
                    self.needs_prefix = false;
                }
                self.inner.styled(style, line);
            }
            self.inner.new_line();
            self.needs_prefix = true;
            rest = &tail[1..];
        }
        if !rest.is_empty() {
            if self.needs_prefix {
                self.inner.text(&self.prefix);
                self.needs_prefix = false;
            }
            self.inner.styled(style, rest);
        }
    }
}
