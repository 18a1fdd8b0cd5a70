use std::fmt;

/// Location of the lexer cursor in the source text.
///
/// `line` and `column` are 1-based and count grapheme clusters; `offset` is
/// the byte offset into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Moves past `grapheme`. Any line break cluster (`\n`, `\r`, `\r\n`)
    /// starts a new line.
    pub(crate) fn step_over(&mut self, grapheme: &str) {
        if is_line_break(grapheme) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += grapheme.len();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns true for the grapheme clusters that terminate a line.
pub(crate) fn is_line_break(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r" | "\r\n")
}
