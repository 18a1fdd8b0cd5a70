use super::position::{Position, is_line_break};
use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// Grapheme-aware cursor over the lexer input.
///
/// The cursor walks grapheme clusters rather than chars so that a marker
/// followed by a combining mark is not mistaken for the bare marker, and so
/// that `\r\n` is a single line break.
pub struct CharStream<'input> {
    input: &'input str,
    graphemes: GraphemeIndices<'input>,
    current_grapheme: Option<(usize, &'input str)>,
    position: Position,
}

impl<'input> CharStream<'input> {
    pub fn new(input: &'input str) -> Self {
        let mut graphemes = input.grapheme_indices(true);
        let current_grapheme = graphemes.next();

        CharStream {
            input,
            graphemes,
            current_grapheme,
            position: Position::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current grapheme cluster without advancing.
    pub fn current(&self) -> Option<&'input str> {
        self.current_grapheme.map(|(_, grapheme)| grapheme)
    }

    /// Byte offset of the cursor; the input length once exhausted.
    pub fn offset(&self) -> usize {
        self.current_grapheme
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    pub fn advance(&mut self) -> Option<&'input str> {
        let (_, current) = self.current_grapheme?;
        self.position.step_over(current);
        self.current_grapheme = self.graphemes.next();
        Some(current)
    }

    /// Returns the grapheme after the current one.
    pub fn peek(&self) -> Option<&'input str> {
        self.graphemes.as_str().graphemes(true).next()
    }

    /// True when the current grapheme is exactly `ch`.
    pub fn current_is(&self, ch: char) -> bool {
        self.current()
            .is_some_and(|g| g.len() == ch.len_utf8() && g.starts_with(ch))
    }

    pub fn current_is_line_break(&self) -> bool {
        self.current().is_some_and(is_line_break)
    }

    /// Whitespace that does not end the line.
    pub fn current_is_inline_whitespace(&self) -> bool {
        self.current().is_some_and(|g| {
            !is_line_break(g) && g.chars().next().is_some_and(char::is_whitespace)
        })
    }

    /// True when the cursor sits on two consecutive line breaks.
    pub fn at_blank_line(&self) -> bool {
        self.current_is_line_break() && self.peek().is_some_and(is_line_break)
    }

    pub fn at_line_start(&self) -> bool {
        self.position.column == 1
    }

    pub fn is_at_end(&self) -> bool {
        self.current_grapheme.is_none()
    }

    /// Returns the input between `start_offset` and the cursor.
    pub fn slice_from(&self, start_offset: usize) -> &'input str {
        &self.input[start_offset..self.offset()]
    }
}
