//! A sink that records spans for later replay.

use crate::output::StyledTextOutput;
use crate::style::Style;

/// Buffers styled spans so a section can be assembled first and
/// written to the real sink only if it ended up with content.
#[derive(Debug, Default)]
pub struct BufferingStyledTextOutput {
    spans: Vec<(Style, String)>,
    has_content: bool,
}

impl BufferingStyledTextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any non-empty span has been written.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Replay the buffered spans into another sink, preserving style
    /// boundaries.
    pub fn write_to(&self, output: &mut dyn StyledTextOutput) {
        for (style, text) in &self.spans {
            output.styled(*style, text);
        }
    }

    /// Discard everything buffered so far.
    pub fn clear(&mut self) {
        self.spans.clear();
        self.has_content = false;
    }
}

impl StyledTextOutput for BufferingStyledTextOutput {
    fn styled(&mut self, style: Style, text: &str) {
        if text.is_empty() {
            return;
        }
        self.has_content = true;
        // Coalesce with the previous span when the style matches.
        if let Some((last_style, last_text)) = self.spans.last_mut() {
            if *last_style == style {
                last_text.push_str(text);
                return;
            }
        }
        self.spans.push((style, text.to_string()));
    }
}
